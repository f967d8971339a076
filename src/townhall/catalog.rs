//! Published city data.
//!
//! Everything here is hand-authored. Event dates are laid out relative to the
//! day the board is seeded, so the festival is always a week out and the
//! advisory always falls on the 10th of the current month.

use crate::model::{
    Announcement, Department, Item, ItemCategory, ItemType, Official, Program, ProgramEntry,
    ProgramKind, Service, ServiceTab,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// The events board as of `today`.
pub fn events(today: NaiveDate) -> Vec<Item> {
    let tenth = NaiveDate::from_ymd_opt(today.year(), today.month(), 10).unwrap_or(today);
    let all_saints = NaiveDate::from_ymd_opt(today.year(), 11, 1).unwrap_or(today);

    let mut festival = Item::new(
        1,
        "Bacoor City Festival",
        "Annual city festival celebrating Bacoor's culture and heritage with parades, food fairs, and cultural performances.",
        midnight(today + Duration::days(7)),
        ItemType::Event,
        ItemCategory::Upcoming,
    );
    festival.full_description = Some("Join us for the annual Bacoor City Festival featuring cultural presentations, food fair showcasing local delicacies, street dancing competition, and fireworks display. The festival celebrates our city's founding anniversary and rich cultural heritage.".into());
    festival.location = Some("Bacoor City Hall Grounds".into());
    festival.time = Some("8:00 AM - 10:00 PM".into());
    festival.registration_required = Some(true);

    let mut consultation = Item::new(
        2,
        "Public Consultation on City Budget",
        "Open forum for citizens to provide input on the proposed 2024 city budget.",
        midnight(today + Duration::days(3)),
        ItemType::Event,
        ItemCategory::Upcoming,
    );
    consultation.full_description = Some("The City Government invites all residents to participate in the public consultation for the proposed 2024 Annual Budget. Share your insights and help prioritize projects and programs for our city.".into());
    consultation.location = Some("City Council Session Hall".into());
    consultation.time = Some("2:00 PM - 5:00 PM".into());
    consultation.registration_required = Some(false);

    let mut cleanup = Item::new(
        3,
        "Clean-up Drive",
        "Community clean-up drive along Bacoor Bay. Volunteers are welcome to join.",
        midnight(today + Duration::days(10)),
        ItemType::Event,
        ItemCategory::Upcoming,
    );
    cleanup.full_description = Some("Help keep our city clean! Join the monthly community clean-up drive along Bacoor Bay. Gloves and garbage bags will be provided. All volunteers will receive a certificate of participation.".into());
    cleanup.location = Some("Bacoor Baywalk".into());
    cleanup.time = Some("6:00 AM - 9:00 AM".into());
    cleanup.registration_required = Some(true);

    let mut road_closure = Item::new(
        4,
        "Road Closure Advisory",
        "Main Street will be closed for road repairs from October 15-20, 2023.",
        midnight(tenth),
        ItemType::Announcement,
        ItemCategory::Announcement,
    );
    road_closure.full_description = Some("Please be advised that Main Street will be closed for road repairs and drainage improvement from October 15-20, 2023. Alternate routes are available via Secondary Road and Coastal Road. Emergency vehicles will have access at all times.".into());

    let mut all_saints_day = Item::new(
        5,
        "All Saints' Day",
        "City government offices will be closed in observance of All Saints' Day.",
        midnight(all_saints),
        ItemType::Holiday,
        ItemCategory::Holiday,
    );
    all_saints_day.full_description = Some("In observance of All Saints' Day, all city government offices will be closed on November 1, 2023. Regular operations will resume on November 2, 2023.".into());

    vec![festival, consultation, cleanup, road_closure, all_saints_day]
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Road Closure Advisory".into(),
            content: "Main Street will be closed for road repairs from October 15-20, 2023. Please use alternate routes. Emergency vehicles will still have access. For inquiries, contact the City Engineering Office.".into(),
            date: "October 10, 2023".into(),
        },
        Announcement {
            id: 2,
            title: "Free Medical Check-up".into(),
            content: "The City Health Office will conduct free medical check-ups for senior citizens on October 25, 2023 at the City Hall grounds from 8:00 AM to 4:00 PM. Bring your senior citizen ID and medical records.".into(),
            date: "October 8, 2023".into(),
        },
        Announcement {
            id: 3,
            title: "Business Permit Renewal".into(),
            content: "Reminder: Business permit renewal for 2024 will start on November 1, 2023. Early renewal (November 1-30) gets 5% discount. Online renewal is available through our e-Services portal.".into(),
            date: "October 5, 2023".into(),
        },
    ]
}

fn official(name: &str, position: &str, department: &str, image: &str) -> Official {
    Official {
        name: name.into(),
        position: position.into(),
        department: department.into(),
        image: image.into(),
    }
}

pub fn officials() -> Vec<Official> {
    vec![
        official("Mayor Strike B. Revilla", "City Mayor", "Executive Office", "mayor.jpg"),
        official(
            "Vice Mayor Rowena Bautista-Mendiola",
            "City Vice Mayor",
            "Legislative Office",
            "vice-mayor.jpg",
        ),
        official(
            "Hon. Lani Mercado-Revilla",
            "Congresswoman",
            "2nd Legislative District, Province of Cavite",
            "congress.jpg",
        ),
        official("Hon. Edwin Malvar", "Board Member", "Committee on Rules", "councilor2.jpg"),
        official(
            "Hon. Alde Joselito Pagulayan",
            "Board Member",
            "Committee on Housing, Land Utilization, and Urban Development",
            "alde.jpg",
        ),
        official("Hon. Rafael Paterno III", "Board Member", "ABC President", "abc.jpg"),
    ]
}

fn department(name: &str, head: &str, contact: &str) -> Department {
    Department {
        name: name.into(),
        head: head.into(),
        contact: contact.into(),
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department("City Mayor's Office", "Mayor Strike B. Revilla", "(046) 434-9801"),
        department("City Health Office", "Dr. Roberto M. Cruz", "(046) 434-9810"),
        department("City Engineering Office", "Engr. Mario S. Tolentino", "(046) 434-9815"),
        department("City Social Welfare", "Ms. Anna L. Garcia", "(046) 434-9820"),
        department("City Treasurer's Office", "Mr. Carlos D. Reyes", "(046) 434-9825"),
        department("City Planning Office", "Arch. Maria S. Lopez", "(046) 434-9830"),
    ]
}

fn service(
    id: u32,
    tab: ServiceTab,
    name: &str,
    description: &str,
    requirements: &[&str],
    processing_time: &str,
    fee: &str,
) -> Service {
    Service {
        id,
        tab,
        name: name.into(),
        description: description.into(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        processing_time: processing_time.into(),
        fee: fee.into(),
    }
}

/// Every service, ordered by tab then id.
pub fn services() -> Vec<Service> {
    use ServiceTab::*;
    vec![
        service(
            1,
            Business,
            "Business Permit Application",
            "Process and requirements for new business registration and renewal of permits.",
            &[
                "Barangay Clearance",
                "Proof of Business Address",
                "DTI/SEC Registration",
                "Mayor's Permit from Previous Year (for renewal)",
            ],
            "3-5 working days",
            "Based on business capitalization",
        ),
        service(
            2,
            Business,
            "Mayor's Clearance",
            "Application for Mayor's Clearance for various purposes including employment and travel.",
            &["Valid ID", "Barangay Clearance", "Purpose Letter"],
            "1-2 working days",
            "PHP 100.00",
        ),
        service(
            3,
            Business,
            "Market Stall Rental",
            "Information on public market stall availability and rental procedures.",
            &[
                "Valid ID",
                "Business Plan",
                "Clearance from Market Administrator",
            ],
            "5-7 working days",
            "Based on stall size and location",
        ),
        service(
            4,
            Health,
            "Medical Consultations",
            "Free medical consultations at City Health Office and Barangay Health Centers.",
            &["Valid ID", "Health Card (if available)"],
            "Same day",
            "Free",
        ),
        service(
            5,
            Health,
            "Immunization Services",
            "Vaccination programs for children, adults, and senior citizens.",
            &["Vaccination Card", "Valid ID"],
            "Same day",
            "Free",
        ),
        service(
            6,
            Social,
            "Social Assistance",
            "Support services for marginalized and vulnerable groups.",
            &["Valid ID", "Proof of Residency"],
            "Varies",
            "Free",
        ),
        service(
            7,
            Education,
            "Scholarship Program",
            "Scholarships and financial assistance for deserving students.",
            &["Application Form", "Transcript of Records"],
            "Varies",
            "Free",
        ),
        service(
            8,
            Infrastructure,
            "Road Repair Requests",
            "Report road damage and request repairs.",
            &["Location Details", "Photos (if available)"],
            "Varies",
            "N/A",
        ),
    ]
}

fn entry(name: &str, detail: &str) -> ProgramEntry {
    ProgramEntry {
        name: name.into(),
        detail: detail.into(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn program(kind: ProgramKind) -> Program {
    match kind {
        ProgramKind::Volunteer => Program {
            kind,
            title: "City Volunteer Program".into(),
            intro: "The City Volunteer Program offers opportunities for citizens to contribute to community development through various initiatives:".into(),
            entries: vec![
                entry("Disaster Response Volunteers", "Assist during calamities and emergencies"),
                entry("Environmental Volunteers", "Participate in clean-up drives and tree planting"),
                entry("Event Volunteers", "Help organize city festivals and public events"),
                entry("Senior Citizen Assistants", "Provide support to elderly citizens"),
                entry("Youth Volunteers", "Leadership and community service opportunities for students"),
            ],
            extra_heading: Some("Requirements".into()),
            extra: lines(&[
                "Must be at least 18 years old (16 with parental consent)",
                "Good moral character",
                "Willing to undergo orientation/training",
                "Can commit at least 4 hours per month",
            ]),
            closing: None,
        },
        ProgramKind::Membership => Program {
            kind,
            title: "Community Programs Membership".into(),
            intro: "The City Government of Bacoor offers several community programs for residents:".into(),
            entries: vec![
                entry("Bacoor Community Health Program", "Free health check-ups and medical services"),
                entry("Livelihood Training Program", "Skills development for entrepreneurs"),
                entry("Youth Development Council", "Leadership programs for young residents"),
                entry("Senior Citizens Association", "Activities and benefits for elderly residents"),
                entry("PWD Federation", "Support and advocacy for persons with disabilities"),
                entry("Urban Gardening Club", "Community gardening and sustainability initiatives"),
            ],
            extra_heading: None,
            extra: Vec::new(),
            closing: Some("Membership is free for Bacoor residents. Each program has regular meetings, workshops, and community activities.".into()),
        },
        ProgramKind::Donation => Program {
            kind,
            title: "Donations & Support".into(),
            intro: "Support the City Government of Bacoor in serving our community better. Your donations help fund various projects and programs:".into(),
            entries: vec![
                entry("Education Support", "Scholarships, school supplies for underprivileged students"),
                entry("Health Programs", "Medical equipment, medicine for community health centers"),
                entry("Disaster Response", "Emergency supplies and equipment"),
                entry("Environmental Projects", "Tree planting, clean-up drives"),
                entry("Senior Citizen Programs", "Meals, activities for elderly residents"),
            ],
            extra_heading: Some("Donation Methods".into()),
            extra: lines(&[
                "Cash or check donation at City Treasurer's Office",
                "Bank transfer to official city accounts",
                "In-kind donations (contact us for accepted items)",
            ]),
            closing: Some("All donations are tax-deductible and will be acknowledged with official receipt.".into()),
        },
    }
}
