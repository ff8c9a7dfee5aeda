mod csv_files;

pub use csv_files::CsvStore;
