pub const ANALYST_SYSTEM_PROMPT: &str = "You are a professional financial analyst with deep \
knowledge of corporate financial statements. You are objective, concise, and ground every \
statement in the figures you are given.";

pub const COMMENTARY_INSTRUCTIONS: &str = "Based on the financial figures below, write an \
objective, concise assessment (about 3-4 paragraphs) of the company's financial position. \
Focus on growth, liquidity, asset efficiency, and profitability. Where a metric is marked \
N/A, say that it could not be computed from the statement rather than guessing.";

/// Builds the user prompt for a follow-up question, grounded in the
/// session's processed statement when one is present.
pub fn grounded_question(report_markdown: Option<&str>, question: &str) -> String {
    match report_markdown {
        Some(table) => format!(
            "The uploaded statement has been processed into the Markdown tables below. Answer \
             the question using the processed data, the computed metrics, and your own \
             expertise.\n\nProcessed data:\n{}\n\nQuestion: {}\n\nAnswer only the question.",
            table, question
        ),
        None => format!(
            "No statement has been uploaded in this session. Answer the question from general \
             financial knowledge.\n\nQuestion: {}",
            question
        ),
    }
}
