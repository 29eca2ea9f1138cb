use crate::rotation::Placeholder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0–100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        (total / self.skills.len() as u32) as u8
    }
}

impl Placeholder for SkillCategory {
    fn placeholder() -> Self {
        Self {
            title: "Skills",
            skills: &[],
        }
    }
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "AI/ML Frameworks",
            skills: const { &[
                skill("TensorFlow", 85),
                skill("PyTorch", 80),
                skill("OpenCV", 90),
                skill("YOLO", 95),
                skill("Scikit-learn", 85),
            ] },
        },
        SkillCategory {
            title: "NLP & Data Analytics",
            skills: const { &[
                skill("Natural Language Processing", 80),
                skill("Pandas", 85),
                skill("NumPy", 90),
                skill("Matplotlib/Seaborn", 80),
                skill("Statistical Analysis", 75),
            ] },
        },
        SkillCategory {
            title: "Programming Languages",
            skills: const { &[
                skill("Python", 95),
                skill("C++", 80),
                skill("JavaScript", 75),
                skill("MATLAB", 70),
                skill("SQL", 75),
            ] },
        },
        SkillCategory {
            title: "Embedded Systems & IoT",
            skills: const { &[
                skill("Raspberry Pi", 90),
                skill("Arduino", 85),
                skill("MQTT", 80),
                skill("ROS", 85),
                skill("Microcontrollers", 80),
            ] },
        },
        SkillCategory {
            title: "Tools & Technologies",
            skills: const { &[
                skill("Git", 85),
                skill("Docker", 70),
                skill("Linux", 80),
                skill("PCB Design", 65),
                skill("3D Modeling", 60),
            ] },
        },
    ]
}

/// Headline numbers shown under the skills grid.
pub fn experience_highlights() -> &'static [(&'static str, &'static str)] {
    &[
        ("6+", "Major Projects"),
        ("90%+", "Model Accuracy"),
        ("30%+", "Efficiency Improvement"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_percentages() {
        for category in skill_categories() {
            assert!(category.skills.iter().all(|s| s.level <= 100), "{}", category.title);
        }
    }

    #[test]
    fn average_level() {
        let category = SkillCategory {
            title: "t",
            skills: const { &[skill("a", 80), skill("b", 91)] },
        };
        assert_eq!(category.average_level(), 85);
        assert_eq!(SkillCategory::placeholder().average_level(), 0);
    }
}
