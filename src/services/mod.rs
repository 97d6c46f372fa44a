pub mod accrual_service;
pub mod output_service;
