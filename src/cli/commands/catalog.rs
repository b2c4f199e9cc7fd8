//! Catalog command handler

use crate::args::CatalogSubcommand;
use course_planner::core::catalog::{by_department, departments, search, Catalog};
use course_planner::core::models::{Course, MeetingBlock, TimeSlot};

/// Dispatch catalog subcommands
///
/// # Errors
/// Returns a printable message when `show` names an unknown course
pub fn run(subcommand: CatalogSubcommand, catalog: &Catalog) -> Result<(), String> {
    match subcommand {
        CatalogSubcommand::Search { query } => {
            let hits = search(catalog, &query);
            if hits.is_empty() {
                println!("No courses match '{query}'");
            }
            print_listing(&hits);
        }
        CatalogSubcommand::Departments => {
            for department in departments(catalog) {
                println!("{department}");
            }
        }
        CatalogSubcommand::Department { name } => {
            let courses = by_department(catalog, &name);
            if courses.is_empty() {
                println!("No courses in department '{name}'");
            }
            print_listing(&courses);
        }
        CatalogSubcommand::Show { id } => {
            let course = catalog
                .get(&id)
                .ok_or_else(|| format!("✗ Unknown course id '{id}'"))?;
            print!("{}", describe(course));
        }
    }
    Ok(())
}

fn print_listing(courses: &[&Course]) {
    for course in courses {
        println!("{}", listing_line(course));
    }
}

/// One-line summary used by search results
pub fn listing_line(course: &Course) -> String {
    format!(
        "{:<12} {:<40} {:<24} {}",
        course.display_code(),
        course.name,
        course.instructor,
        format_slots(&course.time)
    )
}

fn format_slots(slots: &[TimeSlot]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_block(kind: &str, index: usize, block: &MeetingBlock) -> String {
    format!(
        "  {kind} {}: {} | {} | {}\n",
        index + 1,
        block.instructor,
        format_slots(&block.time),
        block.rooms.join(", ")
    )
}

/// Multi-line course description for `catalog show`
pub fn describe(course: &Course) -> String {
    let mut out = format!("{} {}\n", course.display_code(), course.name);
    out.push_str(&format!("  Department: {}\n", course.department));
    out.push_str(&format!("  Instructor: {}\n", course.instructor));
    out.push_str(&format!("  Credits:    {:.1} ({:.1} ECTS)\n", course.credit, course.ects));
    out.push_str(&format!("  Time:       {}\n", format_slots(&course.time)));
    out.push_str(&format!("  Rooms:      {}\n", course.rooms.join(", ")));
    for (i, lab) in course.labs.iter().enumerate() {
        out.push_str(&describe_block("Lab", i, lab));
    }
    for (i, practicum) in course.practicums.iter().enumerate() {
        out.push_str(&describe_block("Practicum", i, practicum));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_planner::core::models::Day;

    fn sample() -> Course {
        let mut course = Course::new(
            "CS101.1".to_string(),
            "Intro to Programming".to_string(),
            "Ada Lovelace".to_string(),
            "Computer Science".to_string(),
        );
        course.time = vec![TimeSlot::new(Day::Monday, 1), TimeSlot::new(Day::Wednesday, 1)];
        course.rooms = vec!["B101".to_string()];
        course.credit = 3.0;
        course.ects = 6.0;
        course.labs = vec![MeetingBlock::new(
            "Grace Hopper".to_string(),
            vec![TimeSlot::new(Day::Friday, 3)],
            vec!["LAB2".to_string()],
        )];
        course
    }

    #[test]
    fn test_describe_lists_labs() {
        let text = describe(&sample());
        assert!(text.starts_with("CS101 .1 Intro to Programming"));
        assert!(text.contains("Time:       Mon/1 Wed/1"));
        assert!(text.contains("Lab 1: Grace Hopper | Fri/3 | LAB2"));
        assert!(!text.contains("Practicum"));
    }

    #[test]
    fn test_show_unknown_id() {
        let catalog = Catalog::new(vec![sample()]);
        let result = run(
            CatalogSubcommand::Show {
                id: "XX999".to_string(),
            },
            &catalog,
        );
        assert!(result.is_err());
    }
}
