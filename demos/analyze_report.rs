use statement_analyzer::{
    analyze_statement, from_raw_rows, render_augmented_table, render_ratio_table,
};

fn main() {
    let dataset = from_raw_rows([
        ("A. CURRENT ASSETS", "400", "500"),
        ("I. Cash and equivalents", "120", "180"),
        ("II. Inventory", "200", "230"),
        ("B. NON-CURRENT ASSETS", "600", "700"),
        ("TOTAL ASSETS", "1000", "1200"),
        ("C. CURRENT LIABILITIES", "200", "250"),
        ("NET REVENUE", "900", "1100"),
        ("NET PROFIT after tax", "90", "121"),
    ]);

    let analysis = analyze_statement(&dataset).expect("statement should carry a total-assets row");

    println!("Growth and asset structure:\n");
    println!("{}", render_augmented_table(&analysis.augmented));

    println!("Financial ratios:\n");
    println!("{}", render_ratio_table(&analysis.ratios));
}
