pub mod employee_reader;
pub mod result_writer;
