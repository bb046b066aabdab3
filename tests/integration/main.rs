mod generate;
mod project_name;
mod usage;
