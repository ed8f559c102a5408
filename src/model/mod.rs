//! Data types for deal context, service catalogs, and proposals.

mod catalog;
mod form;
mod proposal;
mod sample;

pub use catalog::{ServiceCatalog, ServiceCategory};
pub use form::{FormData, ValidationErrors, DEFAULT_PROJECT_TYPE, PROJECT_TYPES};
pub use proposal::{
    generate_id, ProposalData, ProposalSection, ProposalStatus, SavedProposal, SNIPPET_LEN,
};
pub use sample::{sample_form, sample_proposal};
