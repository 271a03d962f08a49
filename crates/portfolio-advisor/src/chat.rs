//! Advisory Chat
//!
//! The built-in keyword rules for the assistant. Order matters: an
//! utterance mentioning both "portfolio" and "risk" gets the portfolio
//! answer because that rule comes first.

use advisor_core::{ChatSession, IntentResponder, IntentRule};
use serde::{Deserialize, Serialize};

/// What the user appears to be asking about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PortfolioAnalysis,
    MarketTrends,
    RiskAssessment,
    InvestmentOptions,
    RetirementPlanning,
    Fallback,
}

pub const GREETING: &str = "Hello! I'm your FinSight Pro AI assistant. I can help you with investment advice, market analysis, portfolio optimization, and financial planning. What would you like to know?";

pub const FALLBACK_RESPONSE: &str = "I'd be happy to help with that! I can provide insights on investments, market analysis, portfolio optimization, risk assessment, and financial planning. Could you be more specific about what you'd like to know?";

/// Canned prompts offered before the user's first message
pub const QUICK_SUGGESTIONS: [&str; 4] = [
    "Analyze my portfolio",
    "Market trends today",
    "Risk assessment",
    "Investment options",
];

pub static ADVISORY_RULES: [IntentRule<Intent>; 5] = [
    IntentRule::new(
        Intent::PortfolioAnalysis,
        &["portfolio", "analyze"],
        "Based on your profile, I recommend a diversified portfolio with 60% stocks and 40% bonds. Your risk tolerance suggests this allocation would be optimal. Would you like me to break down specific fund recommendations?",
    ),
    IntentRule::new(
        Intent::MarketTrends,
        &["market", "trend"],
        "Current market analysis shows positive momentum in tech and healthcare sectors. The S&P 500 is up 12.4% YTD. However, consider the potential impact of rising interest rates on growth stocks. Would you like sector-specific insights?",
    ),
    IntentRule::new(
        Intent::RiskAssessment,
        &["risk"],
        "Your risk assessment indicates a moderate risk tolerance. This means you can handle some volatility for potentially higher returns. I recommend a mix of index funds and blue-chip stocks. Want me to suggest specific investments?",
    ),
    IntentRule::new(
        Intent::InvestmentOptions,
        &["invest", "buy"],
        "For your investment amount and timeline, I suggest starting with broad market ETFs like VTI or SPY, plus some international exposure with VXUS. Would you like specific allocation percentages and reasoning?",
    ),
    IntentRule::new(
        Intent::RetirementPlanning,
        &["retirement", "401k"],
        "For retirement planning, maximize your 401(k) match first, then consider a Roth IRA. Based on your age and income, you should be saving at least 15% for retirement. Need help calculating how much you'll need?",
    ),
];

/// The assistant's responder
pub static ADVISORY_RESPONDER: IntentResponder<Intent> =
    IntentResponder::new(&ADVISORY_RULES, Intent::Fallback, FALLBACK_RESPONSE);

/// Reply to a chat message
pub fn respond_to_message(utterance: &str) -> &'static str {
    ADVISORY_RESPONDER.respond(utterance)
}

/// Intent behind a chat message
pub fn classify_intent(utterance: &str) -> Intent {
    ADVISORY_RESPONDER.classify(utterance).intent
}

/// A new session opened with the assistant greeting
pub fn new_session() -> ChatSession {
    ChatSession::with_greeting(GREETING)
}

/// Suggestions to show for a session; empty once the user has spoken
pub fn suggestions_for(session: &ChatSession) -> &'static [&'static str] {
    if session.transcript.has_user_messages() {
        &[]
    } else {
        &QUICK_SUGGESTIONS
    }
}
