pub mod m20250301_create_department_table;
pub mod m20250301_create_service_template_table;
pub mod m20250315_add_template_code_index;
