use crate::rotation::{MediaRef, Placeholder};

/// A project card in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub category: &'static str,
    pub image: MediaRef,
}

impl Placeholder for Project {
    fn placeholder() -> Self {
        Self {
            id: 0,
            title: "Projects coming soon",
            description: "No projects have been published yet.",
            technologies: &[],
            achievements: &[],
            category: "",
            image: MediaRef::new("traffic-system.jpg"),
        }
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Intelligent Traffic Management System",
            description: "AI-driven adaptive traffic management solution using YOLO-based computer \
                          vision to monitor real-time vehicle flow, integrated with Raspberry Pi and \
                          relays to dynamically control traffic lights.",
            technologies: &["YOLOv5", "Raspberry Pi", "MQTT", "Computer Vision", "IoT"],
            achievements: &[
                "92% accuracy in vehicle detection across 8 vehicle types",
                "30% reduction in average vehicle queue length",
                "22% improvement in traffic flow during peak hours",
            ],
            category: "AI/ML",
            image: MediaRef::new("traffic-system.jpg"),
        },
        Project {
            id: 2,
            title: "Cloth Segregation System using Spectral Analysis",
            description: "Computer vision and spectral sensor-based waste management system to \
                          segregate cloth materials based on type, optimizing textile recycling \
                          operations.",
            technologies: &[
                "AS7265x Spectral Sensor",
                "Computer Vision",
                "Automation",
                "Microcontrollers",
            ],
            achievements: &[
                "85%+ precision in cloth-type classification",
                "40% improvement in sorting speed",
                "70% reduction in human intervention",
            ],
            category: "Automation",
            image: MediaRef::new("cloth-segregation.jpg"),
        },
        Project {
            id: 3,
            title: "4-Wheel Autonomous Rover",
            description: "Fully autonomous rover using RPLiDAR for obstacle detection and path \
                          planning, integrated with ROS Noetic and Raspberry Pi for real-time \
                          navigation.",
            technologies: &["RPLiDAR", "ROS Noetic", "Python", "Raspberry Pi", "Path Planning"],
            achievements: &[
                "90% obstacle avoidance accuracy",
                "Real-time LiDAR scanning and processing",
                "Successful autonomous navigation in complex environments",
            ],
            category: "Robotics",
            image: MediaRef::new("autonomous-rover.jpg"),
        },
        Project {
            id: 4,
            title: "Emotion-Based Digital Twin System",
            description: "Research prototype for modeling human digital twin by mapping emotions \
                          to brain electrical pulses and predicting behavior using machine \
                          learning.",
            technologies: &["EEG Analysis", "LSTM", "Machine Learning", "Neural Networks"],
            achievements: &[
                "Novel framework for emotion-behavior mapping",
                "Multi-modal input capture system",
                "Applications in mental health monitoring",
            ],
            category: "Research",
            image: MediaRef::new("brain-computer.jpg"),
        },
        Project {
            id: 5,
            title: "Elephant Detection & Collision Prevention",
            description: "Safety system for railways in forest areas that detects elephants using \
                          computer vision and GPS collars, triggering automated alerts and \
                          deterrent mechanisms.",
            technologies: &["YOLO", "GPS Tracking", "Computer Vision", "Safety Systems"],
            achievements: &[
                "90%+ accuracy in elephant detection",
                "Real-time movement tracking dashboard",
                "Automated deterrent system for wildlife safety",
            ],
            category: "Conservation",
            image: MediaRef::new("elephant-detection.jpg"),
        },
        Project {
            id: 6,
            title: "SolarAI – Solar Panel Optimization",
            description: "AI-powered solar panel monitoring and cleaning trigger system that \
                          optimizes energy output using real-time temperature, dust, and \
                          performance data.",
            technologies: &[
                "IoT Sensors",
                "Cloud Computing",
                "Anomaly Detection",
                "Energy Optimization",
            ],
            achievements: &[
                "5-30% improvement in energy yield",
                "Automated cleaning trigger system",
                "Reduced maintenance costs and water usage",
            ],
            category: "Energy",
            image: MediaRef::new("solar-ai.jpg"),
        },
    ]
}
