//! Known-good submissions for tests. Enabled by the `fixtures` feature.

use shared_types::{
    CreateCourseFeedbackRequest, CreateJobNotificationRequest, CreatePlacementFeedbackRequest,
};

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// A complete company submission with three selection rounds out of three.
pub fn job_notification_request(email: &str) -> CreateJobNotificationRequest {
    CreateJobNotificationRequest {
        email: text(email),
        company_name: text("Acme Robotics"),
        about_company: text("Acme builds warehouse automation systems across India."),
        correspondence_address: text("12 Industrial Area, Patna, Bihar"),
        date_of_establishment: text("2009-06-01"),
        number_of_employees: text("450"),
        social_media_link: None,
        website: text("https://acme.example.com"),
        type_of_organization: text("Private"),
        mnc_head_office: None,
        nature_of_business: list(&["Core Engineering & technology", "IT/Software"]),
        head_hr_name: text("Asha Rao"),
        head_hr_contact: text("+91 98765 43210"),
        head_hr_email: text("asha@acme.example.com"),
        first_contact_name: text("Vikram Singh"),
        first_contact_email: text("vikram@acme.example.com"),
        first_contact_phone: text("9876543211"),
        second_contact_name: text("Neha Jha"),
        second_contact_email: text("neha@acme.example.com"),
        second_contact_phone: text("9876543212"),
        job_profile: text("Graduate Engineer Trainee"),
        job_title: text("Robotics Engineer"),
        job_description: text("Design, test and commission robotic picking cells for clients."),
        min_hires: text("2"),
        expected_hires: text("5"),
        job_location: text("Bengaluru"),
        required_skills: text("C++, ROS, control systems"),
        eligible_degrees: list(&["B. Tech(4 years)", "M.Tech (2 years)"]),
        eligible_btech_departments: list(&["Mechanical Engineering", "Computer Science & Engineering"]),
        eligible_mtech_departments: list(&["Machine Design"]),
        eligible_phd_departments: list(&["Not Applicable"]),
        job_designation_btech: text("Engineer I"),
        job_desc_btech: text("Build and tune motion planning modules."),
        job_designation_mtech: text("Engineer II"),
        job_desc_mtech: text("Own mechanical design of gripper assemblies."),
        job_designation_phd: text("Not hiring"),
        job_desc_phd: text("No PhD roles are open in this cycle."),
        cgpa_cutoff: text("7.0"),
        backlog_eligibility: text("No"),
        mode_of_selection: text("Campus Visit"),
        selection_rounds: list(&["Aptitude Test", "Personal Interview", "HR Round"]),
        total_rounds: text("3"),
        syllabus: None,
    }
}

/// Course feedback from student S1 for CS101 in 2024-25.
pub fn course_feedback_request() -> CreateCourseFeedbackRequest {
    CreateCourseFeedbackRequest {
        student_id: text("S1"),
        student_name: text("Ravi Kumar"),
        email: text("ravi@student.example.edu"),
        department: text("Computer Science & Engineering"),
        semester: text("5"),
        degree_program: text("B.Tech"),
        academic_year: text("2024-25"),
        course_code: text("CS101"),
        course_name: text("Data Structures"),
        faculty_name: text("Dr. Meera Sinha"),
        rating_teaching: text("5"),
        rating_content: text("4"),
        rating_evaluation: text("4"),
        rating_facilities: text("3"),
        rating_overall: text("4"),
        strengths: text("Clear explanations with worked examples."),
        improvements: text("More lab hours for tree and graph problems."),
        ..Default::default()
    }
}

/// Recruitment feedback with a pending offer and no follow-up contact.
pub fn placement_feedback_request() -> CreatePlacementFeedbackRequest {
    CreatePlacementFeedbackRequest {
        student_email: text("priya@student.example.edu"),
        student_name: text("Priya Singh"),
        enrollment_number: text("21105117001"),
        branch: text("Information Technology"),
        semester: text("7th"),
        academic_year: text("2024-25"),
        company_name: text("Acme Robotics"),
        position_applied: text("Software Engineer"),
        overall_experience: text("4"),
        recruitment_process: text("4"),
        company_reputation_rating: text("5"),
        company_work_culture_rating: text("4"),
        recruitment_process_transparency: text("3"),
        communication_quality: text("4"),
        technical_interview_difficulty: text("Moderate"),
        technical_interview_quality: text("4"),
        hr_interview_experience: text("5"),
        interviewer_behavior: text("5"),
        college_preparation_support: text("3"),
        placement_cell_support: text("4"),
        feedback_received_from_company: text("Yes - Constructive"),
        offer_status: text("Pending"),
        strengths: text("Well structured rounds and prompt replies."),
        improvements: text("Share the test syllabus a little earlier."),
        advice_for_juniors: text("Practice DSA daily and revise operating systems basics."),
        would_recommend: text("Recommend"),
        can_be_contacted: text("No"),
        ..Default::default()
    }
}
