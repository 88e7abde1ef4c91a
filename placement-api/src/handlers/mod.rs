pub mod course_feedback;
pub mod health;
pub mod job_notifications;
pub mod placement_feedback;
