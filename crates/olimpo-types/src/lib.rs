//! Shared type definitions for the Olimpo content backend.
//!
//! This crate is the single source of truth for the record shapes served
//! by the content API. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the portal frontend.
//!
//! # Modules
//!
//! - [`category`] -- content category enum and `categoria` string mapping
//! - [`records`] -- catalogue, blog, and timeline record structs

pub mod category;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use category::ContentCategory;
pub use records::{BlogPost, BlogPostSummary, MythEntity, TimelineEvent};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::category::ContentCategory::export_all();
        let _ = crate::records::MythEntity::export_all();
        let _ = crate::records::BlogPost::export_all();
        let _ = crate::records::BlogPostSummary::export_all();
        let _ = crate::records::TimelineEvent::export_all();
    }
}
