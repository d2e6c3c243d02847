pub const TENDER_ROLE_PROMPT: &str = "You are a public tender expert for Dublin City Council.";

pub const SUPPLIER_ROLE_PROMPT: &str = "You are a market analyst advising a municipality about {product}.";

pub const SCRAPED_DOCUMENTS_HEADER: &str = "Below are documents scraped from the web:";

pub const QUESTION_FORMAT_PROMPT: &str = "Write **exactly five** clarification questions the municipality must answer before drafting a tender.
Output format strictly:
QUESTIONS:
1. ...
2. ...
3. ...
4. ...
5. ...";

pub const DRAFT_ROLE_PROMPT: &str = "You are a senior tender documentation officer at Dublin City Council.";

pub const EXCERPTS_HEADER: &str = "--- EXCERPTS (first pages only) ---";
pub const TENDER_ANSWERS_HEADER: &str = "--- TENDER ANSWERS ---";
pub const SUPPLIER_ANSWERS_HEADER: &str = "--- SUPPLIER ANSWERS ---";

pub const DRAFT_SECTIONS: [&str; 12] = [
    "Introduction & Policy Context",
    "Project Scope & Objectives",
    "Technical Requirements",
    "System Architecture & Data",
    "User Access & Payment",
    "Integration with Council Systems",
    "Service Model & SLAs",
    "Risk Management & Training",
    "Legal / Compliance (GDPR, 2014/24/EU, etc.)",
    "Commercials & Budget",
    "Environmental Commitments",
    "Reporting & Monitoring",
];

pub const DRAFT_TASK_PROMPT: &str = "Write a **2,000-word** ‘Requirements & Specifications’ section for a new tender. Follow **this structure**:";

pub const DRAFT_FORMATTING_PROMPT: &str = "Use tables only when summarizing structured data like site details, budgets, SLAs, or KPIs.
Avoid forcing tabular format for narrative sections.
Limit table columns to 4 or fewer where possible.
If table cell text exceeds width, use superscript¹ and add “Table Notes:” below the table.

Use numbered headings, ≤4-column tables, concrete KPIs, and Word-friendly formatting. Do **NOT** output any questions.";
