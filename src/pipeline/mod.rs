pub mod stage1_roster;
pub mod stage2_ingest;
pub mod stage3_classify;
pub mod stage4_report;
