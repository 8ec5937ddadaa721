pub mod celiac_csi;
pub mod ibs_rome_iv;
pub mod lactose_intolerance;
pub mod sibo_symptom;
