use console_draw_core::charset::Utf8;
use console_draw_core::{
    AnsiColor, Buffer, Color, EncodingMode, NoColor, Point, Recorder, Renderer, Size, TextMetrics,
    TextBlock,
};

const UTF8: TextMetrics = TextMetrics::new(EncodingMode::Utf8);

fn written(text: &str) -> String {
    let mut rec = Recorder::new(Size::new(80, 25));
    Renderer::new(&mut rec, &Utf8, &NoColor, UTF8)
        .write_line(text, None, None)
        .unwrap();
    rec.written()
}

#[test]
fn test_newline_policy_around_device_width() {
    let out = written(&"x".repeat(79));
    assert_eq!(out, format!("{}\n", "x".repeat(79)));

    let out = written(&"x".repeat(80));
    assert_eq!(out.len(), 80);
    assert!(!out.ends_with('\n'));

    let out = written(&"x".repeat(81));
    assert_eq!(out, "x".repeat(80));
}

#[test]
fn test_output_never_has_inner_newline() {
    for input in ["a\nb", "\n\nlead", "trail\n\n", "mid\n\nmid", "\r\nwin\r\n"] {
        let out = written(input);
        let body = out.strip_suffix('\n').unwrap_or(&out);
        assert!(!body.contains('\n'), "{input:?} -> {out:?}");
    }
}

#[test]
fn test_consecutive_lines_land_on_consecutive_rows() {
    let mut buf = Buffer::new(Size::new(10, 4));
    let mut renderer = Renderer::new(&mut buf, &Utf8, &NoColor, UTF8);
    renderer.write_line("short", None, None).unwrap();
    renderer.write_line("exactly 10", None, None).unwrap();
    renderer.write_line("far too long to fit", None, None).unwrap();
    assert_eq!(buf.rows(), vec!["short", "exactly 10", "far too lo", ""]);
    assert_eq!(buf.cursor(), Point::new(0, 3));
}

#[test]
fn test_colored_line_is_wrapped_by_sink() {
    let mut rec = Recorder::new(Size::new(80, 25));
    Renderer::new(&mut rec, &Utf8, &AnsiColor, UTF8)
        .write_line("alert", Some(Color::Red), Some(Color::White))
        .unwrap();
    let out = rec.written();
    assert!(out.starts_with('\x1b'));
    assert!(out.contains("alert"));
    // Colors are reset before the line ends
    assert!(out.ends_with("m\n"));
}

#[test]
fn test_bytes_mode_trims_by_bytes() {
    let mut rec = Recorder::new(Size::new(4, 25));
    Renderer::new(&mut rec, &Utf8, &NoColor, TextMetrics::new(EncodingMode::Bytes))
        .write_line("héllo", None, None)
        .unwrap();
    assert_eq!(rec.written(), "hél");
}

#[test]
fn test_text_block_inside_box() {
    let mut buf = Buffer::new(Size::new(12, 5));
    let mut renderer = Renderer::new(&mut buf, &Utf8, &NoColor, UTF8);
    renderer
        .write_box((0, 0, 11, 4), &console_draw_core::BoxStyle::new())
        .unwrap();
    renderer
        .write_text_block(
            "wrapped inside a frame",
            &TextBlock::new(-2).height(3).at(1, 1),
        )
        .unwrap();
    assert_eq!(
        buf.rows(),
        vec![
            "┌──────────┐",
            "│wrapped   │",
            "│inside a  │",
            "│frame     │",
            "└──────────┘",
        ]
    );
}
