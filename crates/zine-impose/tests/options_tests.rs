use std::path::PathBuf;
use std::str::FromStr;
use zine_impose::*;

#[test]
fn test_validation_no_input_file() {
    let options = ImpositionOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("No input file"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_with_input_file() {
    let options = ImpositionOptions {
        input_file: PathBuf::from("zine.pdf"),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_degenerate_paper() {
    let mut options = ImpositionOptions {
        input_file: PathBuf::from("zine.pdf"),
        ..Default::default()
    };
    options.output_paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 297.0,
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_fill_position_from_str() {
    assert_eq!(FillPosition::from_str("end").unwrap(), FillPosition::End);
    assert_eq!(
        FillPosition::from_str("before-last").unwrap(),
        FillPosition::BeforeLast
    );
    // Legacy underscore spelling accepted
    assert_eq!(
        FillPosition::from_str("before_last").unwrap(),
        FillPosition::BeforeLast
    );
}

#[test]
fn test_fill_position_invalid_string() {
    let result = FillPosition::from_str("middle");
    match result {
        Err(ImposeError::InvalidFillPosition(s)) => assert_eq!(s, "middle"),
        _ => panic!("Expected InvalidFillPosition error"),
    }
}

#[test]
fn test_fill_position_round_trip() {
    for fill in [FillPosition::End, FillPosition::BeforeLast] {
        assert_eq!(FillPosition::from_str(fill.as_str()).unwrap(), fill);
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_serde_round_trip() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("options.json");

    let options = ImpositionOptions {
        input_file: PathBuf::from("input.pdf"),
        fill_position: FillPosition::BeforeLast,
        output_paper_size: PaperSize::A5,
        output_orientation: Orientation::Landscape,
        scaling_mode: ScalingMode::Fill,
        fold_guide: false,
    };

    options.save(&config_path).await.unwrap();
    let loaded = ImpositionOptions::load(&config_path).await.unwrap();

    assert_eq!(options, loaded);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_rejects_bad_fill_position() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("options.json");

    let json = r#"{
        "input_file": "input.pdf",
        "fill_position": "middle",
        "output_paper_size": "A4",
        "output_orientation": "Landscape",
        "scaling_mode": "Fit",
        "fold_guide": true
    }"#;
    tokio::fs::write(&config_path, json).await.unwrap();

    let result = ImpositionOptions::load(&config_path).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_paper_orientation() {
    // A4 landscape is the zine default: 297mm wide, 210mm tall
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
}
