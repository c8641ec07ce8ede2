mod json_test;
mod workflow_test;
