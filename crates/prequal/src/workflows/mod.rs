pub mod prequalification;
