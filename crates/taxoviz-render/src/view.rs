use crate::LayoutOptions;
use crate::render::{RenderOutcome, render};
use crate::surface::DrawSurface;
use taxoviz_core::Taxonomy;

/// Keeps a surface in sync with a taxonomy and a selected id.
///
/// Every setter that changes an input redraws synchronously; setting an equal value does not.
/// The view owns the surface but never the meaning of the selection: callers decide what is
/// selected and hand it in.
pub struct TaxonomyView<S: DrawSurface> {
    surface: S,
    taxonomy: Taxonomy,
    selected: Option<String>,
    options: LayoutOptions,
    draw_count: usize,
    last_outcome: Option<RenderOutcome>,
}

impl<S: DrawSurface> TaxonomyView<S> {
    /// Creates the view and performs the initial draw (the "mount").
    pub fn new(surface: S, taxonomy: Taxonomy, options: LayoutOptions) -> Self {
        let mut view = Self {
            surface,
            taxonomy,
            selected: None,
            options,
            draw_count: 0,
            last_outcome: None,
        };
        view.redraw();
        view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Number of renders that actually drew.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn last_outcome(&self) -> Option<RenderOutcome> {
        self.last_outcome
    }

    /// Returns `false`, without redrawing, when the value is unchanged.
    pub fn set_taxonomy(&mut self, taxonomy: Taxonomy) -> bool {
        if self.taxonomy == taxonomy {
            return false;
        }
        self.taxonomy = taxonomy;
        self.redraw();
        true
    }

    /// Returns `false`, without redrawing, when the value is unchanged.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        if self.selected.as_deref() == id {
            return false;
        }
        self.selected = id.map(str::to_string);
        self.redraw();
        true
    }

    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
        self.redraw();
    }

    /// Lets the host resize (or attach/detach) the surface, then redraws at the new size.
    pub fn resize_surface<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let out = f(&mut self.surface);
        self.redraw();
        out
    }

    pub fn redraw(&mut self) -> RenderOutcome {
        let selection = self.taxonomy.select(self.selected.as_deref());
        let outcome = render(
            &mut self.surface,
            self.taxonomy.top_level(),
            selection,
            &self.options,
        );
        match outcome {
            RenderOutcome::Drawn => self.draw_count += 1,
            RenderOutcome::SurfaceUnavailable => {
                tracing::debug!(
                    nodes = self.taxonomy.len(),
                    "taxonomy surface not ready; skipping draw"
                );
            }
        }
        self.last_outcome = Some(outcome);
        outcome
    }
}
