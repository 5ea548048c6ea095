//! tldrify-summary: Summary domain logic (sans-IO).
//!
//! Settings, the slider-with-input control, hash routes, stored summary
//! records, the summarization service's wire format, and the chat pane
//! state. Browser storage, HTTP and rendering live in `tldrify-io`.

pub mod api;
pub mod chat;
pub mod record;
pub mod route;
pub mod settings;
pub mod slider;

pub use api::{FAILURE_ANSWER, SummarizeResponse, error_message, summarize_url};
pub use chat::{ChatState, EXPORT_MIME, REVEAL_DELAY_MS, SubmitRefused, WordReveal, export_filename};
pub use record::{
    SummaryListing, SummaryRecord, UNTITLED, new_record_id, now_millis, order_by_recency,
};
pub use route::Route;
pub use settings::{Model, Settings, UnknownOption, WritingStyle};
pub use slider::SliderInput;
