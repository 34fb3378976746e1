use anyhow::Result;
use op_bench_core::{Framework, OpConfig, OpRecord, DEFAULT_UNKNOWN_DIM};
use op_bench_frameworks::Registry;

/// Test config file parsing and record selection
#[test]
fn test_config_parsing() -> Result<()> {
    let records = OpRecord::from_file("tests/configs/softmax_basic.json")?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].op, "softmax_with_cross_entropy");
    assert_eq!(records[1].ignore_index, 255);

    let records = OpRecord::from_file("tests/configs/softmax_soft_label.json")?;
    assert!(records[0].soft_label);

    // YAML input goes through the same schema.
    let records = OpRecord::from_file("tests/configs/softmax_axis.yaml")?;
    assert_eq!(records[0].axis, Some(1));

    println!("✅ All config parsing tests passed");
    Ok(())
}

/// Test normalization end-to-end from checked-in config files
#[test]
fn test_normalization_from_files() -> Result<()> {
    let config = OpConfig::from_file("tests/configs/softmax_basic.json", 0, DEFAULT_UNKNOWN_DIM)?;
    assert_eq!(config.logits_shape, vec![4096, 1000]);
    assert_eq!(config.label_shape, vec![4096, 1]);
    assert_eq!(config.num_classes, 1000);
    assert!(config.run_tf && config.run_torch);

    // Symbolic batch dim resolved by unknown_dim.
    let config = OpConfig::from_file("tests/configs/softmax_basic.json", 1, 4)?;
    assert_eq!(config.logits_shape, vec![2048, 21]);
    assert_eq!(config.label_shape, vec![2048, 1]);
    assert_eq!(config.ignore_index, 255);

    let config = OpConfig::from_file("tests/configs/softmax_soft_label.json", 0, DEFAULT_UNKNOWN_DIM)?;
    assert!(!config.run_torch);
    assert!(!config.run_tf);

    let config = OpConfig::from_file("tests/configs/softmax_axis.yaml", 0, DEFAULT_UNKNOWN_DIM)?;
    assert_eq!(config.axis, 1);
    assert_eq!(config.num_classes, 100);
    assert!(!config.run_torch);
    assert!(!config.run_tf);

    println!("✅ Normalization tests passed");
    Ok(())
}

/// Test that plans narrow along with the config
#[test]
fn test_plans_follow_narrowing() -> Result<()> {
    let registry = Registry::builtin();

    let full = OpConfig::from_file("tests/configs/softmax_basic.json", 0, DEFAULT_UNKNOWN_DIM)?;
    assert_eq!(registry.plans_for(&full)?.len(), 3);

    let narrowed =
        OpConfig::from_file("tests/configs/softmax_soft_label.json", 0, DEFAULT_UNKNOWN_DIM)?;
    let plans = registry.plans_for(&narrowed)?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].framework, Framework::Paddle);

    Ok(())
}
