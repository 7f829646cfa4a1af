use super::*;

fn style(size: f64) -> TextStyle {
    TextStyle {
        font_family: Some("Arial".to_string()),
        font_size: size,
        font_weight: None,
    }
}

#[test]
fn deterministic_width_scales_with_columns_and_font_size() {
    let m = DeterministicTextMeasurer::default();
    let a = m.measure("Parks", &style(10.0));
    assert_eq!(a.width, 30.0);
    assert_eq!(a.height, 12.0);
    assert_eq!(a.line_count, 1);

    let b = m.measure("Parks", &style(20.0));
    assert_eq!(b.width, 60.0);
}

#[test]
fn wide_characters_take_two_columns() {
    let m = DeterministicTextMeasurer::default();
    let ascii = m.measure("ab", &style(10.0));
    let cjk = m.measure("公园", &style(10.0));
    assert_eq!(cjk.width, ascii.width * 2.0);
}

#[test]
fn multi_line_text_uses_widest_line() {
    let m = DeterministicTextMeasurer {
        char_width_factor: 0.5,
        line_height_factor: 1.0,
    };
    let t = m.measure("Art\nMuseums", &style(10.0));
    assert_eq!(t.width, 35.0);
    assert_eq!(t.height, 20.0);
    assert_eq!(t.line_count, 2);
}
