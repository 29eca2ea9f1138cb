/// Who the portfolio belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub education: &'static str,
    pub summary: &'static str,
    pub focus_areas: &'static [&'static str],
    /// Facts the chat assistant is allowed to rely on.
    pub facts: &'static [&'static str],
    pub status: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "HARISH",
    headline: "AI/ML ENGINEER & EMBEDDED SYSTEMS INNOVATOR",
    education: "3rd Year BE CSE AIML • D.E. Mahalingam College of Engineering and Technology",
    summary: "Passionate about building intelligent solutions that bridge the digital and \
              physical worlds. Specializing in computer vision, IoT integration, and \
              real-time automation systems.",
    focus_areas: &[
        "Computer Vision",
        "IoT Integration",
        "Edge Computing",
        "Real-time Systems",
    ],
    facts: &[
        "Specializes in computer vision, IoT integration, and real-time automation",
        "Has built projects like Intelligent Traffic Management System with YOLO and Raspberry Pi",
        "Developed Cloth Segregation System using spectral analysis",
        "Experience with autonomous rovers, emotion-based digital twins, elephant detection systems",
        "Skills in YOLO, OpenCV, TensorFlow, PyTorch, embedded systems, ROS, MQTT",
    ],
    status: "Open to Internships & Collaborations",
};
