//! HTML views for the page routes.
//!
//! Handlers depend on the [`ViewRenderer`] port; [`HtmlViews`] is the
//! built-in renderer producing small self-contained documents. Every value
//! taken from the store is HTML-escaped.

use crate::domain::Course;
use crate::domain::ports::DashboardStats;

/// Renders the application's pages.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer: Send + Sync {
    /// Landing page.
    fn home(&self) -> String;
    /// Registration form posting `username`, `email`, `password`.
    fn register(&self) -> String;
    /// Login form posting `email`, `password`.
    fn login(&self) -> String;
    /// Aggregate counts for an authenticated student.
    fn dashboard(&self, stats: &DashboardStats) -> String;
    /// Every stored course with a delete link per row.
    fn courses(&self, courses: &[Course]) -> String;
    /// Course creation form.
    fn create_course(&self) -> String;
}

/// Default HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlViews;

impl ViewRenderer for HtmlViews {
    fn home(&self) -> String {
        page(
            "Home",
            concat!(
                "<h1>Course Desk</h1>\n",
                "<p><a href=\"/register\">Register</a> | <a href=\"/login\">Login</a> | ",
                "<a href=\"/course\">Courses</a></p>\n",
            ),
        )
    }

    fn register(&self) -> String {
        page(
            "Register",
            concat!(
                "<h1>Register</h1>\n",
                "<form method=\"post\" action=\"/register\">\n",
                "<input name=\"username\" placeholder=\"Username\" required>\n",
                "<input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n",
                "<input name=\"password\" type=\"password\" placeholder=\"Password\" required>\n",
                "<button type=\"submit\">Register</button>\n",
                "</form>\n",
                "<p><a href=\"/login\">Already registered? Log in</a></p>\n",
            ),
        )
    }

    fn login(&self) -> String {
        page(
            "Login",
            concat!(
                "<h1>Login</h1>\n",
                "<form method=\"post\" action=\"/login\">\n",
                "<input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n",
                "<input name=\"password\" type=\"password\" placeholder=\"Password\" required>\n",
                "<button type=\"submit\">Login</button>\n",
                "</form>\n",
                "<p><a href=\"/register\">Create an account</a></p>\n",
            ),
        )
    }

    fn dashboard(&self, stats: &DashboardStats) -> String {
        let body = format!(
            concat!(
                "<h1>Dashboard</h1>\n",
                "<p>Total courses: <span id=\"total_courses\">{}</span></p>\n",
                "<p>Total students: <span id=\"total_students\">{}</span></p>\n",
                "<p><a href=\"/course\">Courses</a> | <a href=\"/course/create\">New course</a> | ",
                "<a href=\"/logout\">Logout</a></p>\n",
            ),
            stats.total_courses, stats.total_students,
        );
        page("Dashboard", &body)
    }

    fn courses(&self, courses: &[Course]) -> String {
        let mut body = String::from(concat!(
            "<h1>Courses</h1>\n",
            "<p><a href=\"/course/create\">New course</a></p>\n",
            "<table>\n",
            "<tr><th>Name</th><th>Price</th><th>Duration</th><th>Discount</th><th></th></tr>\n",
        ));
        body.extend(courses.iter().map(course_row));
        body.push_str("</table>\n");
        page("Course", &body)
    }

    fn create_course(&self) -> String {
        page(
            "Create Course",
            concat!(
                "<h1>Create Course</h1>\n",
                "<form method=\"post\" action=\"/course/create\">\n",
                "<input name=\"course_name\" placeholder=\"Name\" required>\n",
                "<input name=\"course_price\" type=\"number\" placeholder=\"Price\" required>\n",
                "<input name=\"course_duration\" type=\"number\" placeholder=\"Duration\" required>\n",
                "<input name=\"course_discount\" type=\"number\" placeholder=\"Discount\" required>\n",
                "<button type=\"submit\">Create</button>\n",
                "</form>\n",
            ),
        )
    }
}

fn course_row(course: &Course) -> String {
    format!(
        concat!(
            "<tr><td>{name}</td><td>{price}</td><td>{duration}</td><td>{discount}</td>",
            "<td><a href=\"/course/delete/{id}\">Delete</a></td></tr>\n",
        ),
        name = escape_html(&course.name),
        price = course.price,
        duration = course.duration,
        discount = course.discount,
        id = course.id,
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
