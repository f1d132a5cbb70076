#![allow(dead_code)]

//! Course catalog: the full list plus a skill-tag filter.

use crate::demo::DEMO_COURSES;
use crate::models::Course;

pub fn catalog() -> &'static [Course] {
    &DEMO_COURSES
}

pub fn courses_for_skill(skill: &str) -> Vec<&'static Course> {
    DEMO_COURSES
        .iter()
        .filter(|course| {
            course
                .skill_tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(skill))
        })
        .collect()
}
