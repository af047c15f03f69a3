//! Copy shown on the landing page. Everything here is `'static` and read-only.

pub const SECTION_HOME: &str = "home";
pub const SECTION_SERVICES: &str = "services";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_WHY_US: &str = "why-us";
pub const SECTION_CONTACT: &str = "contact";

pub const SECTIONS: [&str; 5] = [
    SECTION_HOME,
    SECTION_SERVICES,
    SECTION_ABOUT,
    SECTION_WHY_US,
    SECTION_CONTACT,
];

pub fn anchor(section: &str) -> String {
    format!("#{}", section)
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub static SERVICES: &[Service] = &[
    Service {
        id: "equipment-rental",
        title: "Equipment Rental & Leasing",
        short_description: "Flexible IT equipment solutions for all your technology needs",
        icon: "🖥️",
        description: "We provide comprehensive IT equipment rental services including servers, networking devices, workstations, and more. Our flexible rental periods and free replacement policy ensure uninterrupted operations for your organization.",
        benefits: &[
            "Servers & Networking Devices",
            "CCTV & Security Devices",
            "Laptops, Desktops & Workstations",
            "Projectors, Printers, QR & Barcode Scanners",
            "Flexible Rental Period",
            "Free Replacement During Rental",
        ],
    },
    Service {
        id: "examination-support",
        title: "Examination Support Services",
        short_description: "Complete examination management from start to finish",
        icon: "📋",
        description: "Our end-to-end examination support covers everything from proctoring to certification issuance. We handle the complexities of exam management so you can focus on your core educational mission.",
        benefits: &[
            "Onsite & Remote Proctoring",
            "Logistics & Venue Management",
            "Secure Paper & Digital Exam Handling",
            "Candidate Registration & Verification",
            "Marks Processing & Certificate Issuance",
            "Compliance & Reporting Support",
        ],
    },
    Service {
        id: "omr-processing",
        title: "Optical Mark Recognition (OMR)",
        short_description: "High-speed, accurate answer sheet processing",
        icon: "⚙️",
        description: "Our OMR solutions deliver lightning-fast processing with unmatched accuracy. Reduce manual errors and ensure secure, reliable exam scoring for high-stakes assessments.",
        benefits: &[
            "High-Speed Processing",
            "High Accuracy Results",
            "Significant Error Reduction",
            "Secure Exam Scoring",
        ],
    },
    Service {
        id: "technical-services",
        title: "Technical Services",
        short_description: "Expert technical support and maintenance solutions",
        icon: "🛠️",
        description: "Keep your technology running smoothly with our comprehensive technical services. From repairs to network management, our expert team ensures your infrastructure performs at its best.",
        benefits: &[
            "Equipment Repair & Preventive Maintenance",
            "Network Setup & Management",
            "Installation & Troubleshooting",
            "Event-Critical Technical Support",
        ],
    },
    Service {
        id: "collaborations",
        title: "Collaborations & Technology Solutions",
        short_description: "Innovative digital solutions for modern assessments",
        icon: "🌐",
        description: "Embrace the future of assessments with our cutting-edge technology solutions. From AI-powered proctoring to custom integrations, we help you stay ahead in the digital education landscape.",
        benefits: &[
            "Online Exam Platforms",
            "AI-Powered Remote Proctoring",
            "Secure Data Management",
            "Custom Integration",
            "Training & Dedicated Support",
        ],
    },
    Service {
        id: "logistics",
        title: "Logistics & Ancillary Services",
        short_description: "Secure storage and distribution across locations",
        icon: "🚚",
        description: "Our logistics solutions ensure your equipment and materials reach their destination securely and on time. From warehousing to multi-location distribution, we've got you covered.",
        benefits: &[
            "Secure Warehousing",
            "Specialized Transportation",
            "Equipment Calibration & Maintenance",
            "Multi-Location Distribution",
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ABOUT_FEATURES: &[Highlight] = &[
    Highlight {
        icon: "🛡️",
        title: "Secure & Reliable",
        description: "Enterprise-grade security for all exam operations",
    },
    Highlight {
        icon: "⚡",
        title: "Fast Deployment",
        description: "Quick setup and seamless integration",
    },
    Highlight {
        icon: "👥",
        title: "Expert Support",
        description: "24/7 dedicated technical assistance",
    },
    Highlight {
        icon: "✅",
        title: "Proven Track Record",
        description: "500+ successful examinations managed",
    },
];

pub static REASONS: &[Highlight] = &[
    Highlight {
        icon: "🛡️",
        title: "Reliable Equipment & Infrastructure",
        description: "State-of-the-art technology backed by rigorous quality checks and maintenance protocols.",
    },
    Highlight {
        icon: "👥",
        title: "Experienced Technical & Invigilation Teams",
        description: "Trained professionals who ensure smooth operations and maintain exam integrity.",
    },
    Highlight {
        icon: "📝",
        title: "End-to-End Exam & Assessment Management",
        description: "Complete solutions from planning to results processing under one roof.",
    },
    Highlight {
        icon: "⚖️",
        title: "Regulatory Compliance",
        description: "Full adherence to examination board guidelines and data protection regulations.",
    },
    Highlight {
        icon: "📈",
        title: "Scalable Solutions for All Institution Sizes",
        description: "Flexible solutions that grow with your organization from 100 to 100,000+ candidates.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Exams Managed" },
    Stat { value: "1M+", label: "Candidates Served" },
    Stat { value: "100+", label: "Partner Institutions" },
    Stat { value: "99.9%", label: "Uptime Guaranteed" },
];

#[derive(Debug, PartialEq)]
pub struct SectionLink {
    pub name: &'static str,
    pub section: &'static str,
}

pub static SECTION_LINKS: &[SectionLink] = &[
    SectionLink { name: "Home", section: SECTION_HOME },
    SectionLink { name: "Services", section: SECTION_SERVICES },
    SectionLink { name: "About Us", section: SECTION_ABOUT },
    SectionLink { name: "Why Choose Us", section: SECTION_WHY_US },
    SectionLink { name: "Contact", section: SECTION_CONTACT },
];

pub const PHONE_DISPLAY: &str = "+91 8745060006";
pub const EMAIL: &str = "info@FortiSecure.com";
pub const ADDRESS: &str = "E-41, Block E, Noida Sector 3, Noida, Uttar Pradesh";
pub const BUSINESS_HOURS: &str = "Mon - Sat: 9:00 AM - 6:00 PM";

#[derive(Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📞",
        title: "Phone",
        value: PHONE_DISPLAY,
        href: "tel:+918745060006",
    },
    ContactChannel {
        icon: "✉️",
        title: "Email",
        value: EMAIL,
        href: "mailto:info@FortiSecure.com",
    },
    ContactChannel {
        icon: "📍",
        title: "Address",
        value: ADDRESS,
        href: "#",
    },
];

pub static FOOTER_SERVICES: &[&str] = &[
    "Equipment Rental",
    "Examination Support",
    "OMR Processing",
    "Technical Services",
    "Technology Solutions",
    "Logistics Services",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<&str> = SERVICES.iter().map(|s| s.id).collect();

        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn every_service_lists_benefits() {
        assert_eq!(SERVICES.len(), 6);
        assert!(SERVICES.iter().all(|s| !s.benefits.is_empty()));
    }

    #[test]
    fn section_links_point_at_known_sections() {
        for link in SECTION_LINKS {
            assert!(SECTIONS.contains(&link.section), "{}", link.section);
        }
        assert_eq!(anchor(SECTION_WHY_US), "#why-us");
    }

    #[test]
    fn footer_lists_one_entry_per_service() {
        assert_eq!(FOOTER_SERVICES.len(), SERVICES.len());
    }
}
