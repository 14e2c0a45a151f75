//! Tests for file-level rendering through StylizeService.

mod common;

use common::fixtures::{self, colors};
use neon_stylize::{Bitmap, Style};
use neondither::error::ServiceError;
use neondither::models::{ExportFormat, RenderConfig};
use neondither::services::{StylizeJob, StylizeService};
use pretty_assertions::assert_eq;

fn service_with(style: Style, format: Option<ExportFormat>) -> StylizeService {
    let mut config = RenderConfig::default();
    config.set_style(style);
    config.export.format = format;
    config.export.optimize = false;
    StylizeService::new(config).unwrap()
}

#[tokio::test]
async fn test_batch_preserves_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = vec![
        fixtures::write_png(dir.path(), "wide.png", &fixtures::ramp(48, 16)),
        fixtures::write_png(dir.path(), "tall.png", &fixtures::ramp(9, 31)),
    ];

    for style in [
        Style::FloydSteinberg,
        Style::Atkinson,
        Style::SmoothDiffuse,
        Style::Stippling,
        Style::Gradient,
    ] {
        let service = service_with(style, None);
        let jobs = service.jobs_for(&inputs, dir.path());
        let outcomes = service.render_batch(jobs).await;
        assert_eq!(outcomes.len(), 2);

        for outcome in &outcomes {
            assert!(outcome.result.is_ok(), "{style}: {:?}", outcome.result);
        }
        common::assert_png_file(&outcomes[0].job.output, 48, 16);
        common::assert_png_file(&outcomes[1].job.output, 9, 31);
    }
}

#[tokio::test]
async fn test_yaml_config_renders_neon_red() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("render.yaml");
    std::fs::write(&config_path, fixtures::ATKINSON_RED_YAML).unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "gray.png",
        &Bitmap::filled(3, 3, colors::DARK_GRAY),
    );

    let config = RenderConfig::load(&config_path).unwrap();
    let service = StylizeService::new(config).unwrap();
    let output = dir.path().join("gray-out.png");
    let outcome = service
        .render_job(StylizeJob {
            input,
            output: output.clone(),
        })
        .await;
    assert!(outcome.result.is_ok());

    let bitmap = common::assert_png_file(&output, 3, 3);
    common::assert_all_pixels(&bitmap, [255, 0, 0, 255]);
}

#[tokio::test]
async fn test_failed_render_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"not a png").unwrap();
    let output = dir.path().join("broken-out.png");
    std::fs::write(&output, b"previous result").unwrap();

    let service = service_with(Style::FloydSteinberg, None);
    let outcome = service
        .render_job(StylizeJob {
            input,
            output: output.clone(),
        })
        .await;

    assert!(matches!(outcome.result, Err(ServiceError::Export(_))));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous result");
}

#[tokio::test]
async fn test_batch_continues_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = fixtures::write_png(dir.path(), "good.png", &fixtures::ramp(8, 8));
    let missing = dir.path().join("missing.png");

    let service = service_with(Style::Gradient, None);
    let jobs = service.jobs_for(&[missing, good], dir.path());
    let outcomes = service.render_batch(jobs).await;

    assert!(outcomes[0].result.is_err());
    assert!(outcomes[1].result.is_ok());
    assert!(!outcomes[0].job.output.exists());
    assert!(outcomes[1].job.output.exists());
}

#[tokio::test]
async fn test_white_image_renders_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_png(dir.path(), "white.png", &Bitmap::filled(2, 2, colors::WHITE));

    let service = service_with(Style::FloydSteinberg, Some(ExportFormat::Png));
    let output = dir.path().join("white-out.png");
    service.render_file(&input, &output).unwrap();

    let bitmap = common::assert_png_file(&output, 2, 2);
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(bitmap.pixel(x, y)[3], 0);
        }
    }
}

#[test]
fn test_ascii_text_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_png(dir.path(), "black.png", &Bitmap::filled(60, 40, colors::BLACK));

    let service = service_with(Style::Ascii, None);
    assert_eq!(service.format(), ExportFormat::Text);
    let output = service.output_path(&input, dir.path());
    assert_eq!(output.file_name().unwrap(), "black-ascii.txt");

    service.render_file(&input, &output).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "###\n###\n");
}

#[test]
fn test_ascii_html_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_png(dir.path(), "black.png", &Bitmap::filled(60, 40, colors::BLACK));

    let service = service_with(Style::Ascii, Some(ExportFormat::Html));
    let output = service.output_path(&input, dir.path());
    service.render_file(&input, &output).unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("###\n###\n</pre>"));
}

#[test]
fn test_jpeg_export_flattens_onto_backdrop() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_png(dir.path(), "white.png", &Bitmap::filled(16, 16, colors::WHITE));

    let service = service_with(Style::FloydSteinberg, Some(ExportFormat::Jpeg));
    let output = service.output_path(&input, dir.path());
    assert_eq!(output.extension().unwrap(), "jpg");
    service.render_file(&input, &output).unwrap();

    // All-transparent output over black stays black after JPEG
    let decoded = neondither::rendering::load_bitmap(&output).unwrap();
    for [r, g, b, a] in decoded.iter_pixels() {
        assert!(r < 8 && g < 8 && b < 8, "got ({r},{g},{b})");
        assert_eq!(a, 255);
    }
}

#[test]
fn test_pixel_format_rejects_ascii_style() {
    let service = service_with(Style::Ascii, Some(ExportFormat::Png));
    let err = service
        .render_bytes(&Bitmap::filled(40, 40, colors::BLACK))
        .unwrap_err();
    assert_eq!(err.to_string(), "Export error: png export needs bitmap output");
}
