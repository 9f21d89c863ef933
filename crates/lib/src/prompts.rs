//! # Prompt Templates for SQL Generation
//!
//! The employee schema never changes at runtime, so the instruction context
//! is compiled in rather than introspected per request. Placeholders use
//! `{name}` and are substituted with plain string replacement.

/// System prompt for the query-generation task. `{language}` and `{db_name}`
/// come from the storage provider.
pub const QUERY_SYSTEM_PROMPT: &str = "You are a {language} expert for a {db_name} employee database. \
Write a single, read-only {language} query that answers the user's question. \
Expected output is a single {language} query only. Do not add explanations or apologies.";

/// The fixed schema and join rules handed to the model with every question.
pub const SCHEMA_CONTEXT: &str = r#"Database schema:
- employees (emp_no, birth_date, first_name, last_name, gender, hire_date)
- departments (dept_no, dept_name)
- dept_manager (emp_no, dept_no, from_date, to_date)
- dept_emp (emp_no, dept_no, from_date, to_date)
- titles (emp_no, title, from_date, to_date)
- salaries (emp_no, salary, from_date, to_date)

Important notes:
1. Salary information is ONLY in the 'salaries' table, NOT in the 'employees' table.
2. To get salary information, you MUST join the 'employees' and 'salaries' tables using emp_no.
3. When calculating average salary or comparing salaries, always use the 'salaries' table.
4. A row that is currently in effect has to_date = '9999-01-01'. Use that filter for "current" salary, title, department, or manager questions.
5. Department information lives in the departments, dept_emp, and dept_manager tables; join via dept_no and emp_no as required.

Example queries:
1. Show first 5 employees:
SELECT e.emp_no, e.first_name, e.last_name, e.birth_date, e.gender, e.hire_date
FROM employees e
LIMIT 5;

2. Get average salary of all employees:
SELECT AVG(salary) as avg_salary
FROM salaries;

3. Find employees with salary above average:
SELECT e.first_name, e.last_name, s.salary
FROM employees e
JOIN salaries s ON e.emp_no = s.emp_no
WHERE s.salary > (SELECT AVG(salary) FROM salaries)
AND s.to_date = '9999-01-01'
LIMIT 10;

4. Get department managers:
SELECT e.first_name, e.last_name, d.dept_name
FROM employees e
JOIN dept_manager dm ON e.emp_no = dm.emp_no
JOIN departments d ON dm.dept_no = d.dept_no
WHERE dm.to_date = '9999-01-01'
LIMIT 5;

5. Find employees hired in a specific year:
SELECT first_name, last_name, hire_date
FROM employees
WHERE SUBSTR(hire_date, 1, 4) = '1986'
LIMIT 5;

Guidelines for generating SQL queries:
- When asked "who", join the relevant tables and retrieve the full name (first_name and last_name) associated with the emp_no.
- When asked "what", identify the specific information requested (job title, department name, salary) and join the necessary tables to retrieve it.
- When asked "when", include the relevant date fields (hire_date, from_date, to_date) and specify conditions for date ranges.
- For an employee's current department or title, filter on to_date = '9999-01-01'.
- If querying for department managers, join the dept_manager table using both emp_no and dept_no.
- Use appropriate joins and subqueries when necessary. Do not use placeholders for table or column names."#;

/// User prompt template for the query-generation task.
pub const QUERY_USER_TEMPLATE: &str = r#"{context}

Convert this natural language query to {language} for the employee database: {prompt}"#;

/// Fills the user prompt template with the schema context and the question.
pub fn build_user_prompt(language: &str, question: &str) -> String {
    QUERY_USER_TEMPLATE
        .replace("{context}", SCHEMA_CONTEXT)
        .replace("{language}", language)
        .replace("{prompt}", question)
}
