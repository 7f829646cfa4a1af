mod config;
mod document;
