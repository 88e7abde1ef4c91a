use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Job notifications: the JSON document plus the columns used for
    // uniqueness, filtering and sorting
    conn.execute(
        "CREATE TABLE IF NOT EXISTS job_notifications (
            id VARCHAR PRIMARY KEY,
            application_id VARCHAR NOT NULL UNIQUE,
            email VARCHAR NOT NULL UNIQUE,
            company_name VARCHAR NOT NULL,
            company_key VARCHAR NOT NULL,
            status VARCHAR NOT NULL DEFAULT 'Pending' CHECK (status IN ('Pending', 'Under Review', 'Approved', 'Rejected', 'On Hold')),
            is_active BOOLEAN NOT NULL DEFAULT 1,
            submission_date VARCHAR NOT NULL,
            last_updated VARCHAR NOT NULL,
            document TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_job_notifications_status
            ON job_notifications(status, submission_date)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_job_notifications_active
            ON job_notifications(is_active, status)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_job_notifications_company
            ON job_notifications(company_key)",
        [],
    )?;

    // Course feedback, one per (student_id, course_code, academic_year);
    // the duplicate check runs before insert
    conn.execute(
        "CREATE TABLE IF NOT EXISTS course_feedback (
            id VARCHAR PRIMARY KEY,
            student_id VARCHAR NOT NULL,
            email VARCHAR NOT NULL,
            course_code VARCHAR NOT NULL,
            academic_year VARCHAR NOT NULL,
            department VARCHAR NOT NULL,
            semester VARCHAR NOT NULL,
            faculty_name VARCHAR NOT NULL,
            faculty_key VARCHAR NOT NULL,
            created_at VARCHAR NOT NULL,
            document TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_course_feedback_student_course
            ON course_feedback(student_id, course_code, academic_year)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_course_feedback_department
            ON course_feedback(department, semester, created_at)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_course_feedback_course
            ON course_feedback(course_code, academic_year)",
        [],
    )?;

    // Placement feedback, one per (enrollment_number, company, academic_year)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS placement_feedback (
            id VARCHAR PRIMARY KEY,
            enrollment_number VARCHAR NOT NULL,
            company_name VARCHAR NOT NULL,
            company_key VARCHAR NOT NULL,
            academic_year VARCHAR NOT NULL,
            branch VARCHAR NOT NULL,
            semester VARCHAR NOT NULL,
            offer_status VARCHAR NOT NULL CHECK (offer_status IN ('Selected', 'Rejected', 'Pending')),
            created_at VARCHAR NOT NULL,
            document TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_placement_feedback_student_company
            ON placement_feedback(enrollment_number, company_key, academic_year)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_placement_feedback_branch
            ON placement_feedback(branch, academic_year, created_at)",
        [],
    )?;

    Ok(())
}
