//! Shared constants: user-facing messages, DOM hooks and config defaults.

// ── Contact form messages ───────────────────────────────────────

/// Shown when any contact field is blank after trimming.
pub const VALIDATION_MESSAGE: &str = "Please fill all fields.";

/// Status text and button label while a submission is in flight.
pub const SENDING_MESSAGE: &str = "Sending…";

/// Success text when the server acknowledges without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks! Message sent.";

/// Rejection text when the server declines without a message.
pub const DEFAULT_REJECTED_MESSAGE: &str = "Server rejected the submission.";

/// Fallback when the response is neither an acknowledgment nor readable text.
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str = "Server error. Try again later.";

/// Shown when the request never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Submit button label restored when the original label was empty.
pub const DEFAULT_SUBMIT_LABEL: &str = "Send message";

// ── DOM hooks ───────────────────────────────────────────────────

pub const YEAR_ID: &str = "year";
pub const CONFIG_ID: &str = "siteConfig";

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const MAIN_NAV_ID: &str = "mainNav";
pub const NAV_LINK_SELECTOR: &str = ".main-nav a";

pub const TYPING_ID: &str = "typing";

pub const PROJECT_MODAL_ID: &str = "projectModal";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_DESC_ID: &str = "modalDesc";
pub const MODAL_LINKS_ID: &str = "modalLinks";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const DETAILS_BUTTON_SELECTOR: &str = ".details-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_TITLE_SELECTOR: &str = ".project-title";
pub const PROJECT_EXCERPT_SELECTOR: &str = ".project-excerpt";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

// ── Config defaults ─────────────────────────────────────────────

/// Relative path the contact form posts to.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "contact_submit.php";

/// Upper bound on one contact request, including reading the body.
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Viewports at or below this width use the collapsible menu.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 900;

pub const DEFAULT_TYPE_DELAY_MS: u32 = 60;
pub const DEFAULT_ERASE_DELAY_MS: u32 = 30;
pub const DEFAULT_HOLD_DELAY_MS: u32 = 900;
pub const DEFAULT_NEXT_PHRASE_DELAY_MS: u32 = 300;

pub const DEFAULT_PHRASES: [&str; 4] = [
    "I build responsive websites.",
    "I solve problems with code.",
    "Learning React & Node.js.",
    "Open to internships and gigs.",
];
