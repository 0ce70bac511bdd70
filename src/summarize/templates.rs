//! Canned summary templates keyed by keyword presence

/// A canned summary chosen when any of its keywords appears in a document
pub struct SummaryTemplate {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub points: &'static [&'static str],
    pub themes: &'static [&'static str],
    pub action_items: &'static [&'static str],
}

pub const FINANCE: SummaryTemplate = SummaryTemplate {
    name: "finance",
    keywords: &["financial", "revenue", "sales", "market", "budget"],
    points: &[
        "Q1 revenue increased by 15% compared to previous quarter, primarily driven by expansion in international markets and introduction of new product lines.",
        "Operating expenses reduced by 8% due to cost-saving initiatives and improved operational efficiency in manufacturing processes.",
        "Customer acquisition costs decreased by 12% while customer retention rate improved to 89%, indicating successful marketing strategy adjustments.",
        "Projected financial growth for Q2 estimates a 10-12% increase in revenue, contingent on market conditions and successful product launches.",
    ],
    themes: &[
        "Revenue Growth",
        "Cost Optimization",
        "Market Expansion",
        "Customer Retention",
        "Operational Efficiency",
    ],
    action_items: &[
        "Review international market performance before the Q2 planning cycle.",
        "Extend the cost-saving initiatives to remaining manufacturing sites.",
        "Track retention against the 89% benchmark in monthly reports.",
    ],
};

pub const COMPUTER_ORGANIZATION: SummaryTemplate = SummaryTemplate {
    name: "computer-organization",
    keywords: &[
        "register transfer",
        "microoperation",
        "common bus",
        "control function",
    ],
    points: &[
        "Register transfer language describes the movement of data between registers as a sequence of microoperations.",
        "Control functions are Boolean conditions that decide when a given register transfer takes place.",
        "A common bus built from multiplexers lets several registers share one set of data lines, selected by control inputs.",
        "Arithmetic, logic and shift microoperations are the elementary steps every instruction is composed of.",
        "Memory transfers are expressed as reads and writes through the address register, with 2 basic operations per access.",
    ],
    themes: &[
        "Register Transfer Language",
        "Microoperations",
        "Bus Organization",
        "Control Logic",
    ],
    action_items: &[
        "Practice writing register transfer statements for each microoperation type.",
        "Draw the common bus system and trace the select lines for every register.",
    ],
};

/// Templates in match priority order
pub const TEMPLATES: &[&SummaryTemplate] = &[&FINANCE, &COMPUTER_ORGANIZATION];

/// First template with a keyword contained in `text_lower`
pub fn match_template(text_lower: &str) -> Option<&'static SummaryTemplate> {
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.keywords.iter().any(|k| text_lower.contains(k)))
}
