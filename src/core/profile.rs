//! # Profile Content
//!
//! Everything the page says about its owner. Pure data; the TUI decides how
//! it looks.

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub pitch: &'static str,
    pub focus: &'static str,
    pub currently: &'static str,
    pub photo_caption: [&'static str; 2],
    pub about: &'static [&'static str],
    pub experience: &'static [Entry],
    pub core_skills: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub exploring: &'static [&'static str],
    pub projects: &'static [Project],
    pub education: &'static [Entry],
    pub contact_intro: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// A dated card (experience or education).
pub struct Entry {
    pub time: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: Option<&'static str>,
}

pub struct Project {
    pub title: &'static str,
    pub stack: &'static str,
    pub description: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn footer(&self, year: i32) -> String {
        format!("© {year} Portfolio by {}", self.name)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Swaroop Mudholkar",
    tagline: "Electronics • Embedded • IoT • Web",
    headline: "I like making hardware talk to the digital world.",
    pitch: "I'm an Electronics Engineering student & Embedded / IoT enthusiast who enjoys \
            turning ideas into working prototypes. From microcontrollers and sensors to clean, \
            functional frontends - I like owning the full flow of a project.",
    focus: "Embedded · IoT · Web Systems",
    currently: "B.Tech ENTC @ PCCOE",
    photo_caption: [
        "Electronics & Telecommunication Engineering · PCCOE",
        "Embedded Systems • IoT • Web Development",
    ],
    about: &[
        "I am an engineering student passionate about embedded systems, electronics and \
         real-world problem solving. I enjoy designing hardware projects, coding \
         microcontrollers and learning new technologies that bridge the gap between \
         hardware and software.",
        "I'm currently pursuing B.Tech in Electronics and Telecommunication Engineering \
         (2023-2027) at Pimpri Chinchwad College of Engineering (PCCOE), Nigdi, Pune. I am \
         also interested in analytics tools like Power BI and advanced Microsoft Excel and \
         plan to explore them further.",
        "I completed a 4-week internship at Cotmac Electronics Pvt. Ltd., Bhosari MIDC, \
         Pune, and have participated in Smart India Hackathon (SIH) 2024, IETE National \
         Level Project Competition at PCCOE&R, Ravet and E-Yantra 2025. I am also part of \
         the PCCOE EnTC Internship Cell as Documentation Lead.",
    ],
    experience: &[
        Entry {
            time: "4 Weeks (June 2025 - July 2025)",
            title: "Intern - Cotmac Electronics Pvt. Ltd.",
            subtitle: "Bhosari MIDC, Pune",
            description: Some(
                "Gained exposure to industrial electronics, panels and automation workflows. \
                 Understood how engineering concepts are applied in real projects and improved \
                 documentation, observation and practical problem-solving skills.",
            ),
        },
        Entry {
            time: "2025-2026",
            title: "Documentation Lead - PCCOE EnTC Internship Cell",
            subtitle: "PCCOE, Nigdi, Pune",
            description: Some(
                "Maintained clear, structured documentation for internship-related activities \
                 and coordinated with team members, sharpening communication and organization \
                 skills.",
            ),
        },
        Entry {
            time: "2024-2025",
            title: "Project Competitions & Robotics Events",
            subtitle: "IETE Project Competition & E-Yantra 2025",
            description: Some(
                "Presented hardware and embedded projects at national-level platforms, \
                 strengthening my interest in robotics, embedded systems and innovation.",
            ),
        },
        Entry {
            time: "2024",
            title: "Participant - Smart India Hackathon (SIH) 2024",
            subtitle: "National Level Hackathon",
            description: Some(
                "Worked in a team to design and propose solutions for a real-world problem \
                 statement, focusing on innovation, feasibility and implementation strategy.",
            ),
        },
    ],
    core_skills: &[
        "C, C++ and Embedded C for microcontroller programming",
        "Arduino & ESP32 for quick prototyping and IoT projects",
        "Basic STM32 experience for sensor interfacing & control",
        "Python for scripts, tooling and quick experiments",
    ],
    tools: &[
        "MATLAB",
        "Multisim",
        "E-Plan",
        "Git & GitHub",
        "Basic PCB / circuit design understanding",
    ],
    exploring: &[
        "HTML, CSS and JavaScript for simple frontends & UIs",
        "Interested in learning tools like Power BI and advanced Excel for data analysis and \
         reporting.",
    ],
    projects: &[
        Project {
            title: "Proactive Detection of Aspergillus Growth Through Indoor Air Monitoring",
            stack: "STM32 • UART • DHT22 • MQ135 • LCD DISPLAY",
            description: "Designed an indoor air monitoring system that measures temperature, \
                          humidity and air quality using DHT22 and MQ135 sensors. The system \
                          processes sensor data on an STM32 microcontroller and displays \
                          environmental conditions on an LCD, along with warnings when \
                          conditions are ideal for Aspergillus growth. Focused on reliable \
                          sensor interfacing, data handling and clear user feedback.",
        },
        Project {
            title: "Smart Chair System for Real-Time Posture Monitoring and Wellness Reminder",
            stack: "ESP32 • FORCE RESISTOR SENSORS • ULTRASONIC SENSOR • TOUCH SENSOR",
            description: "Developed a smart chair system that uses force resistive sensors, an \
                          ultrasonic sensor and a touch sensor to monitor sitting posture in \
                          real time. The system detects slouching, unbalanced sitting and \
                          improper distance from the backrest, and can be extended to give \
                          timely wellness reminders such as posture correction and break \
                          alerts. The goal is to promote healthy sitting habits and reduce \
                          long-term posture-related issues.",
        },
        Project {
            title: "Refrigerator Door Alarm (Power Electronics Mini Project)",
            stack: "LDR • TRANSISTOR • RESISTORS • CAPACITOR • BUZZER",
            description: "Built a simple yet effective circuit that detects when the fridge \
                          door remains open for too long. An LDR senses the internal light \
                          when the door is open, and after a delay of around one minute, a \
                          buzzer is activated to alert the user. This project strengthened my \
                          basics in power electronics, timing circuits and practical component \
                          selection.",
        },
    ],
    education: &[
        Entry {
            time: "2023 - 2027",
            title: "B.Tech in Electronics and Telecommunication Engineering",
            subtitle: "Pimpri Chinchwad College of Engineering, Nigdi, Pune",
            description: None,
        },
        Entry {
            time: "2021 - 2023",
            title: "12th Science",
            subtitle: "S. B. Patil College of Science and Commerce, Ravet, Pune",
            description: None,
        },
        Entry {
            time: "2021",
            title: "10th (CBSE)",
            subtitle: "S. B. Patil Public School, Ravet, Pune",
            description: None,
        },
    ],
    contact_intro: "If you have any questions, opportunities or collaborations in mind, feel \
                    free to reach out!",
    email: "swaroopmudholkar@gmail.com",
    phone: "+91-8830157488",
    location: "Pune, Maharashtra, India",
    github: "https://github.com/swaroop6031",
    linkedin: "https://www.linkedin.com/in/swaroop-mudholkar-entc6031a",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_sections_populated() {
        assert_eq!(PROFILE.experience.len(), 4);
        assert_eq!(PROFILE.projects.len(), 3);
        assert_eq!(PROFILE.education.len(), 3);
        assert!(PROFILE.education.iter().all(|e| e.description.is_none()));
    }

    #[test]
    fn test_mailto_and_footer() {
        assert_eq!(PROFILE.mailto(), "mailto:swaroopmudholkar@gmail.com");
        assert_eq!(PROFILE.footer(2026), "© 2026 Portfolio by Swaroop Mudholkar");
    }
}
