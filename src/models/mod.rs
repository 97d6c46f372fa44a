pub mod csv_models;
pub mod fee_rates;
pub mod ray;
