pub mod panel;
pub mod summary;
pub mod tables;

pub use panel::{compute_panel, run_panel, PanelOutput, PanelResult};
pub use summary::{summarize, SummaryOutput};
pub use tables::{
    comparison_by_category_institution, rank_by_institution, share_by_institution,
    trend_by_period_institution, CategoryInstitutionTotal, InstitutionTotal,
    PeriodInstitutionTotal,
};
