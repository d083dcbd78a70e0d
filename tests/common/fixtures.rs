//! Static taxonomy fixtures used across harnesses.
//!
//! [`sample_taxonomy`] is a hand-picked, internally consistent slice of the
//! APQC framework: two full category subtrees, a category whose number
//! (`10`) shares a leading digit with category `1`, and records exercising
//! every optional field. Harnesses asserting on specific codes or positions
//! all run against this one dataset.

use pcf_core::{Process, CONTEXT};

use super::builders::ProcessBuilder;

/// A small, valid slice of the APQC Process Classification Framework.
pub fn sample_taxonomy() -> Vec<Process> {
    vec![
        ProcessBuilder::new("10002", "1.0")
            .name("Develop Vision and Strategy")
            .description("Define the corporate mission and long-term strategic vision.")
            .build(),
        ProcessBuilder::new("10017", "1.1")
            .name("Define the business concept and long-term vision")
            .parent(format!("{CONTEXT}/10002"))
            .build(),
        ProcessBuilder::new("10021", "1.1.1")
            .name("Assess the external environment")
            .description("Evaluate competitors, market trends, and economic factors.")
            .parent(format!("{CONTEXT}/10017"))
            .build(),
        ProcessBuilder::new("10022", "1.1.2")
            .name("Survey market and determine customer wants")
            .build(),
        ProcessBuilder::new("10004", "3.0")
            .name("Market and Sell Products and Services")
            .description("The full marketing and sales lifecycle.")
            .build(),
        ProcessBuilder::new("10101", "3.4")
            .name("Develop sales strategy")
            .child(format!("{CONTEXT}/10102"))
            .child(format!("{CONTEXT}/10104"))
            .build(),
        ProcessBuilder::new("10102", "3.4.2")
            .name("Manage sales orders")
            .description("Accept, enter, and track customer sales orders.")
            .parent(format!("{CONTEXT}/10101"))
            .metrics()
            .build(),
        ProcessBuilder::new("10103", "3.4.2.5")
            .name("Process back orders and updates")
            .parent(format!("{CONTEXT}/10102"))
            .build(),
        ProcessBuilder::new("10104", "3.4.6")
            .name("Manage sales partners and alliances")
            .build(),
        ProcessBuilder::new("10110", "3.5")
            .name("Develop and manage marketing plans")
            .build(),
        ProcessBuilder::new("11251", "10.0")
            .name("Acquire, Construct, and Manage Assets")
            .build(),
        ProcessBuilder::new("11252", "10.1")
            .name("Plan and acquire assets")
            .build(),
    ]
}

/// Codes of every record in [`sample_taxonomy`], in insertion order.
pub const SAMPLE_CODES: &[&str] = &[
    "10002", "10017", "10021", "10022", "10004", "10101", "10102", "10103", "10104", "10110",
    "11251", "11252",
];
