pub mod sea_orm_entity;
mod session_gate_postgres;

pub use session_gate_postgres::SessionGatePostgres;
