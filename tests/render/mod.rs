mod tests_mapping;
mod tests_scenarios;
