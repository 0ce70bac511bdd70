//! Sample documents loaded at startup

use crate::types::{ContentType, NewDocument};
use crate::utils::mebibytes;

use super::DocumentStore;

fn sample_documents() -> Vec<NewDocument> {
    vec![
        NewDocument::new("Q1 Financial Report 2023.pdf", ContentType::Pdf, mebibytes(2.4))
            .with_content(
                "This document contains financial growth analysis for Q1 2023. Revenue increased by 15% compared to previous quarter. Market expansion led to economic growth across all sectors.",
            ),
        NewDocument::new("Project Proposal.docx", ContentType::Docx, mebibytes(1.8))
            .with_content(
                "Detailed proposal for the new market expansion project. Includes budget allocation, resource requirements, and expected revenue increase.",
            ),
        NewDocument::new("Sales Presentation.pptx", ContentType::Pptx, mebibytes(5.1))
            .with_content(
                "Quarterly sales presentation showing financial growth, customer acquisition metrics, and revenue projections.",
            ),
    ]
}

pub fn insert_sample_documents(store: &DocumentStore) {
    for doc in sample_documents() {
        if let Err(e) = store.create(doc) {
            tracing::warn!("Failed to seed sample document: {}", e);
        }
    }
}
