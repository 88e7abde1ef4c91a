//! Fixed vocabularies offered by the portal forms.

pub const NATURE_OF_BUSINESS: &[&str] = &[
    "Core Engineering & technology",
    "Analytics",
    "IT/Software",
    "Oil & Gas",
    "Data Science",
    "Cyber Security",
    "Finance & Consulting",
    "Management",
    "Teaching/Research",
    "Media",
    "E-Commerce",
    "Construction",
    "Design",
    "Manufacturing",
    "Infrastructure",
    "Other",
];

pub const ELIGIBLE_DEGREES: &[&str] = &[
    "B. Tech(4 years)",
    "B.Arch(5 years)",
    "M.Tech (2 years)",
    "MBA",
    "PhD",
];

pub const BTECH_DEPARTMENTS: &[&str] = &[
    "All",
    "Civil Engineering",
    "Mechanical Engineering",
    "Electrical Engineering",
    "Electronics & Communication Engineering",
    "Computer Science & Engineering",
    "Information Technology",
    "Chemical Technology (Leather Technology)",
    "Biomedical & Robotic Engineering",
    "Electrical & Electronics Engineering",
    "Civil Engineering with Computer Application",
    "Computer Science & Engineering (AI)",
    "Fire Technology & Safety",
    "Computer Science & Engineering (Cyber Security)",
    "Aeronautical Engineering",
    "Food Processing & Preservation",
    "Computer Science & Engineering (IoT)",
    "Electronics & Communication Engineering (Advance Communication Technology)",
    "Computer Science & Engineering(AI & ML)",
    "Chemical Engineering",
    "Computer Science & Engineering(Data Science)",
    "Electronics Engineering (VLSI Design & Technology)",
    "Mining Engineering",
    "3-D Animation & Graphics",
    "Mechanical & Smart Manufacturing",
    "Mechatronics Engineering",
    "Computer Science & Engineering (Networks)",
    "Computer Science & Engg (IOT & Cyber Security including Block Chain Technology)",
    "Robotics and Automation",
    "Instrumentation Engineering",
    "Agricultural Engineering",
    "Waste Management",
    "Petrochemical Engineering",
    "Chemical Engineering (Plastic & Polymer)",
    "Marine Engineering",
    "B.Arch",
    "Not Applicable",
];

pub const MTECH_DEPARTMENTS: &[&str] = &[
    "All",
    "Machine Design",
    "Thermal Engineering",
    "Manufacturing Technology",
    "Energy System and Management",
    "Manufacturing Engineering",
    "Advanced Electronics and Communication Engineering",
    "VLSI Design",
    "Signal Processing and VLSI Technology",
    "Micro Electronics & VLSI Technology",
    "Advance Communication Technology",
    "Electronics and Communication Engineering",
    "Geotechnical Engineering",
    "Transportation Engineering",
    "Structural Engineering",
    "Computer Science & Engineering",
    "Cyber Security",
    "Electrical Energy Systems",
    "Power System",
    "Electrical Power System",
    "Geoinformatics",
    "MBA",
    "Not Applicable",
];

pub const PHD_DEPARTMENTS: &[&str] = &[
    "All",
    "Civil Engineering",
    "Computer Science and Engineering",
    "Electrical Engineering",
    "Electronics and Communication Engineering",
    "Mechanical Engineering",
    "Not Applicable",
];

pub const SELECTION_ROUNDS: &[&str] = &[
    "Pre-Placement Talk",
    "Aptitude Test",
    "Technical Test(Online Assessment)",
    "Personal Interview",
    "HR Round",
    "Group Discussion",
    "Psychometric Test",
    "Medical Test",
    "Other",
];

// Course feedback

pub const COURSE_DEPARTMENTS: &[&str] = &[
    "Civil Engineering",
    "Mechanical Engineering",
    "Electrical Engineering",
    "Electronics & Communication Engineering",
    "Computer Science & Engineering",
    "Information Technology",
    "Chemical Technology",
    "Biomedical Engineering",
    "Aeronautical Engineering",
    "Mining Engineering",
    "Agricultural Engineering",
    "Other",
];

pub const COURSE_SEMESTERS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8"];

pub const DEGREE_PROGRAMS: &[&str] = &["B.Tech", "B.Arch", "M.Tech", "MBA", "PhD"];

pub const COURSE_ACADEMIC_YEARS: &[&str] = &["2023-24", "2024-25", "2025-26", "2026-27"];

pub const IMPROVEMENT_AREAS: &[&str] = &[
    "Teaching Methods",
    "Course Content",
    "Evaluation System",
    "Library Resources",
    "Lab Equipment",
    "Hostel Facilities",
    "Sports Facilities",
    "Career Guidance",
    "Placement Support",
    "Administrative Support",
    "Campus Infrastructure",
    "Extracurricular Activities",
];

// Placement feedback

pub const BRANCHES: &[&str] = &[
    "Computer Science & Engineering",
    "Information Technology",
    "Electronics & Communication Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Biomedical & Robotic Engineering",
    "Fire Technology & Safety",
    "Computer Science & Engineering (AI)",
    "Computer Science & Engineering (Cyber Security)",
    "Computer Science & Engineering (Data Science)",
    "Computer Science & Engineering (IoT)",
    "Electronics Engineering (VLSI Design & Technology)",
    "Mechatronics Engineering",
    "Robotics and Automation",
    "Other",
];

pub const ORDINAL_SEMESTERS: &[&str] = &["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"];

pub const PLACEMENT_ACADEMIC_YEARS: &[&str] = &["2023-24", "2024-25", "2025-26"];

pub const INTERVIEW_DIFFICULTY: &[&str] = &["Easy", "Moderate", "Difficult", "Very Difficult"];

pub const COMPANY_FEEDBACK: &[&str] = &["Yes - Positive", "Yes - Constructive", "No", "Minimal"];

pub const RECOMMENDATION: &[&str] = &[
    "Highly Recommend",
    "Recommend",
    "Neutral",
    "Would Not Recommend",
];

pub const YES_NO: &[&str] = &["Yes", "No"];
