pub mod comparison;
pub mod parsed_line;
pub mod variable_map;
