//! Sample deal context and proposal for demos and previews.

use chrono::Utc;

use super::{FormData, ProposalData, ServiceCatalog};
use crate::selection::{build_service_text, Selection};

/// Sample form for a multi-location emergency care client, with every
/// built-in service selected.
pub fn sample_form() -> FormData {
    let catalog = ServiceCatalog::builtin();
    let services = build_service_text(&catalog, &Selection::select_all(&catalog));

    FormData::new()
        .with_client_name("Physicians Premier ER")
        .with_client_profile(
            "Physicians Premier ER is a network of freestanding emergency rooms operating multiple \
             locations across Texas. They provide 24/7 emergency medical care with board-certified \
             physicians, emphasizing compassion, efficiency, and patient-centered care. They are \
             expanding with new location openings and need comprehensive digital marketing support \
             across all locations.",
        )
        .with_project_type("Full-Service")
        .with_service_requirements(services)
        .with_budget_range("$8,000 - $15,000/month")
        .with_timeline("12-month retainer")
        .with_special_notes(
            "Must maintain consistent branding aligned with core values: Compassion, Efficiency, \
             Patient-Centered Care. Coordinate with facility directors for patient survey follow-up. \
             Multilingual content may be needed for certain locations.",
        )
}

/// Sample proposal matching [`sample_form`], dated today.
pub fn sample_proposal() -> ProposalData {
    ProposalData {
        proposal_title: Some(
            "Comprehensive Digital Marketing & Web Services Proposal for Physicians Premier ER"
                .to_string(),
        ),
        client_name: Some("Physicians Premier ER".to_string()),
        executive_summary: Some(
            "## Executive Summary\n\n\
             We propose a **comprehensive digital marketing and web services engagement** for \
             Physicians Premier ER, designed to support your multi-location emergency care network \
             with consistent, high-quality online presence management.\n\n\
             Our services span **website development and maintenance**, **SEO optimization**, \
             **content management**, **social media**, **blog content creation**, **patient review \
             systems**, **Google Business Profile management**, and **image optimization** across \
             all locations."
                .to_string(),
        ),
        client_context: Some(
            "## Client Context\n\n\
             Physicians Premier ER operates a **growing network of freestanding emergency rooms** \
             across Texas, providing 24/7 board-certified emergency medical care.\n\n\
             **Key Considerations:**\n\
             - Multiple locations requiring consistent branding and individual page management\n\
             - Ongoing new location openings requiring launch support\n\
             - Core values of **Compassion, Efficiency, and Patient-Centered Care** must be reflected in all content\n\
             - Local SEO is critical for emergency services visibility in each market"
                .to_string(),
        ),
        scope_of_work: Some(
            "## Scope of Work\n\n\
             ### Website Development & Maintenance\n\
             - Developing and updating website pages for multiple locations\n\
             - Performing backend WordPress theme and plugin updates weekly\n\n\
             ### Search Engine Optimization (SEO)\n\
             - Writing and posting SEO-friendly blog posts\n\
             - Adjusting and adding internal links to improve site navigation and SEO\n\n\
             ### Social Media Management\n\
             - Writing and designing social media posts for Facebook, Instagram, and Twitter\n\
             - Creating custom 250-word posts for Google My Business"
                .to_string(),
        ),
        deliverables: Some(
            "## Deliverables\n\n\
             - **Website Maintenance** - Weekly updates, bug fixes, and new page creation across all locations\n\
             - **Blog Content** - 4-8 SEO-optimized blog posts per month on health and safety topics\n\
             - **Patient Survey System** - Setup and ongoing tracking for new patient feedback\n\
             - **Monthly Reporting** - Performance summary covering traffic, SEO rankings, and engagement"
                .to_string(),
        ),
        pricing_breakdown: Some(
            "## Pricing Breakdown\n\n\
             | Service | Monthly Investment |\n\
             |---|---|\n\
             | Website Development & Maintenance | $2,500 |\n\
             | SEO Optimization | $2,000 |\n\
             | Content Updates & Management | $1,000 |\n\
             | Social Media Management | $2,000 |\n\
             | Blog Posts (4-8/month) | $1,500 |\n\
             | Patient Review System | $500 |\n\
             | Google Business Profile Management | $1,000 |\n\
             | Image Management | $500 |\n\n\
             **New Location Launch Add-on:** $2,500 per location (one-time setup)"
                .to_string(),
        ),
        total_estimate: Some("$11,000/month retainer + $2,500 per new location launch".to_string()),
        timeline_and_milestones: Some(
            "## Timeline & Milestones\n\n\
             **Month 1:** Onboarding & Audit\n\
             - Complete website audit across all locations\n\
             - Milestone: Audit report and content strategy delivered\n\n\
             **Month 2-3:** Foundation Building\n\
             - Optimize all existing location pages for SEO\n\
             - Milestone: All location pages optimized, first blog posts published\n\n\
             **Month 4-12:** Growth & Optimization\n\
             - Refine strategy based on performance data\n\
             - Milestone: Quarterly performance reviews with measurable growth metrics"
                .to_string(),
        ),
        terms_and_next_steps: Some(
            "## Terms & Next Steps\n\n\
             **Engagement Terms:**\n\
             - 12-month retainer agreement with monthly invoicing\n\
             - 30-day notice required for cancellation after initial 6-month commitment\n\n\
             **Next Steps:**\n\
             1. Review and approve this proposal\n\
             2. Schedule onboarding kickoff meeting with key stakeholders\n\
             3. Execute services agreement to begin Month 1 audit\n\n\
             **Validity:** This proposal is valid for 30 days from the date of issue."
                .to_string(),
        ),
        generated_date: Some(Utc::now().format("%Y-%m-%d").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProposalSection;

    #[test]
    fn test_sample_form_is_valid() {
        let form = sample_form();
        assert!(form.validate().is_ok());
        assert!(form
            .service_requirements
            .starts_with("Website Development & Maintenance:\n- "));
        assert!(form.service_requirements.ends_with(
            "- Optimizing image file sizes for faster website performance"
        ));
    }

    #[test]
    fn test_sample_proposal_has_every_section() {
        let proposal = sample_proposal();
        for section in ProposalSection::ALL {
            assert!(proposal.section(section).is_some(), "{:?}", section);
        }
        assert_eq!(proposal.generated_date.as_deref().map(str::len), Some(10));
    }
}
