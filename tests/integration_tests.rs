use statement_analyzer::*;

fn reference_statement() -> StatementDataset {
    from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("CURRENT ASSETS", "400", "500"),
        ("CURRENT LIABILITIES", "200", "250"),
        ("NET REVENUE", "900", "1100"),
        ("NET PROFIT", "90", "121"),
    ])
}

#[test]
fn test_reference_statement_full_pipeline() {
    let analysis = analyze_statement(&reference_statement()).unwrap();

    let total = analysis.augmented.find(labels::TOTAL_ASSETS).unwrap();
    assert!((total.growth_rate - 20.0).abs() < 1e-9);
    assert!((total.prior_asset_share - 100.0).abs() < 1e-9);
    assert!((total.current_asset_share - 100.0).abs() < 1e-9);

    let current_assets = analysis.augmented.find(labels::CURRENT_ASSETS).unwrap();
    assert!((current_assets.growth_rate - 25.0).abs() < 1e-9);
    assert!((current_assets.prior_asset_share - 40.0).abs() < 1e-9);
    assert!((current_assets.current_asset_share - 500.0 / 1200.0 * 100.0).abs() < 1e-9);

    // Average total assets is 1100; revenue of 1100 turns assets exactly once.
    assert_eq!(analysis.ratios.current_ratio_prior, RatioValue::Value(2.0));
    assert_eq!(analysis.ratios.current_ratio_current, RatioValue::Value(2.0));
    assert_eq!(analysis.ratios.asset_turnover, RatioValue::Value(1.0));

    let margin = analysis.ratios.net_profit_margin_current.as_f64().unwrap();
    assert!((margin - 11.0).abs() < 1e-9);
    let roa = analysis.ratios.return_on_assets.as_f64().unwrap();
    assert!((roa - 11.0).abs() < 1e-9);
}

#[test]
fn test_growth_with_zero_prior_is_large_but_finite() {
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("New subsidiary", "0", "50"),
    ]);

    let analysis = analyze_statement(&dataset).unwrap();
    let row = analysis.augmented.find("New subsidiary").unwrap();

    assert!(row.growth_rate.is_finite());
    assert!(!row.growth_rate.is_nan());
    assert!(row.growth_rate > 1e10);
}

#[test]
fn test_missing_anchor_is_a_structural_failure() {
    let dataset = from_raw_rows([
        ("CURRENT ASSETS", "400", "500"),
        ("NET REVENUE", "900", "1100"),
    ]);

    let result = analyze_statement(&dataset);
    assert!(matches!(result, Err(AnalysisError::AnchorNotFound(_))));
}

#[test]
fn test_current_ratio_sentinels() {
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("CURRENT ASSETS", "200", "200"),
        ("CURRENT LIABILITIES", "100", "0"),
    ]);

    let ratios = analyze_statement(&dataset).unwrap().ratios;
    assert_eq!(ratios.current_ratio_prior, RatioValue::Value(2.0));
    assert_eq!(ratios.current_ratio_current, RatioValue::Infinite);
}

#[test]
fn test_margin_periods_are_independent() {
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("NET REVENUE", "900", "0"),
        ("NET PROFIT", "90", "121"),
    ]);

    let ratios = analyze_statement(&dataset).unwrap().ratios;
    assert_eq!(ratios.net_profit_margin_current, RatioValue::Unavailable);
    let prior = ratios.net_profit_margin_prior.as_f64().unwrap();
    assert!((prior - 10.0).abs() < 1e-9);
}

#[test]
fn test_partial_statement_degrades_gracefully() {
    // No liquidity line items and no profit row: liquidity, margins, and
    // ROA are unavailable, but turnover still computes.
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("NET REVENUE", "900", "1100"),
    ]);

    let ratios = analyze_statement(&dataset).unwrap().ratios;
    assert_eq!(ratios.current_ratio_prior, RatioValue::Unavailable);
    assert_eq!(ratios.current_ratio_current, RatioValue::Unavailable);
    assert_eq!(ratios.net_profit_margin_prior, RatioValue::Unavailable);
    assert_eq!(ratios.net_profit_margin_current, RatioValue::Unavailable);
    assert_eq!(ratios.return_on_assets, RatioValue::Unavailable);
    assert_eq!(ratios.asset_turnover, RatioValue::Value(1.0));
}

#[test]
fn test_csv_ingestion_feeds_the_pipeline() {
    let csv_text = "\
Line Item,Prior,Current
TOTAL ASSETS,\"1,000\",1200
CURRENT ASSETS,400,500
CURRENT LIABILITIES,200,250
NET REVENUE,900,1100
NET PROFIT,90,121
Footnote reference,see note 4,n/a
";
    let dataset = read_statement_csv(csv_text.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 6);

    // Unparseable cells coerce to zero instead of failing the row.
    let footnote = dataset.find("Footnote").unwrap();
    assert_eq!(footnote.prior_value, 0.0);
    assert_eq!(footnote.current_value, 0.0);

    let analysis = analyze_statement(&dataset).unwrap();
    assert_eq!(analysis.ratios.current_ratio_current, RatioValue::Value(2.0));

    // Input order survives all the way through.
    let labels_in_order: Vec<&str> = analysis
        .augmented
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    assert_eq!(labels_in_order[0], "TOTAL ASSETS");
    assert_eq!(labels_in_order[5], "Footnote reference");
}

#[test]
fn test_lookup_uses_first_match_in_order() {
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("NET REVENUE from goods", "900", "1100"),
        ("NET REVENUE from services", "10", "20"),
    ]);

    let ratios = analyze_statement(&dataset).unwrap().ratios;
    // 1100 / 1100 average assets: the goods row won the lookup.
    assert_eq!(ratios.asset_turnover, RatioValue::Value(1.0));
}

#[test]
fn test_report_rendering_markers() {
    let dataset = from_raw_rows([
        ("TOTAL ASSETS", "1000", "1200"),
        ("CURRENT ASSETS", "200", "200"),
        ("CURRENT LIABILITIES", "100", "0"),
    ]);

    let analysis = analyze_statement(&dataset).unwrap();
    let ratio_table = render_ratio_table(&analysis.ratios);

    assert!(ratio_table.contains("| Current ratio (current) | Infinite |"));
    assert!(ratio_table.contains("| Asset turnover (current) | N/A |"));

    let statement_table = render_augmented_table(&analysis.augmented);
    assert!(statement_table.contains("| TOTAL ASSETS | 1000.00 | 1200.00 | 20.00 | 100.00 | 100.00 |"));
}

#[test]
fn test_summary_for_commentary_layer() {
    let analysis = analyze_statement(&reference_statement()).unwrap();
    let summary = analysis.summary();

    assert_eq!(summary.metrics[0].metric, "Current asset growth");
    assert_eq!(summary.metrics[0].value, "25.00%");

    let markdown = summary.to_markdown();
    assert!(markdown.contains("| NET PROFIT |"));
    assert!(markdown.contains("| Return on assets (current) | 11.00% |"));
}

#[test]
fn test_rerun_produces_byte_identical_output() {
    let dataset = reference_statement();

    let first = analyze_statement(&dataset).unwrap();
    let second = analyze_statement(&dataset).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);

    let first_summary = first.summary().to_markdown();
    let second_summary = second.summary().to_markdown();
    assert_eq!(first_summary, second_summary);
}
