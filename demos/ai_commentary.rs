use statement_analyzer::llm::{CommentaryGenerator, GeminiClient, DEFAULT_MODEL};
use statement_analyzer::{analyze_statement, from_raw_rows, SessionContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")
        .expect("Set GEMINI_API_KEY in the environment or a .env file");

    let dataset = from_raw_rows([
        ("CURRENT ASSETS", "400", "500"),
        ("TOTAL ASSETS", "1000", "1200"),
        ("CURRENT LIABILITIES", "200", "250"),
        ("NET REVENUE", "900", "1100"),
        ("NET PROFIT", "90", "121"),
    ]);

    let analysis = analyze_statement(&dataset)?;
    let summary = analysis.summary();

    let generator = CommentaryGenerator::new(GeminiClient::new(api_key), DEFAULT_MODEL);

    println!("Requesting commentary...\n");
    let commentary = generator.comment(&summary).await?;
    println!("{}\n", commentary);

    let mut session = SessionContext::new();
    session.set_report_markdown(summary.to_markdown());
    session.push_assistant(commentary);

    let question = "Is the liquidity position improving or deteriorating?";
    println!("Q: {}\n", question);
    let answer = generator.answer(&session, question).await?;
    println!("A: {}", answer);

    Ok(())
}
