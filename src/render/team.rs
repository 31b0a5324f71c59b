use super::html::{escape, position_class, present};
use crate::model::{Alumni, AlumniGroup, Alumnus, Entry, Professor, TeamMember};
use std::fmt::Write;

pub const PLACEHOLDER_IMAGE: &str = "assets/images/team/placeholder.png";

/// A headed list of entries, or nothing when the list is empty.
fn entries(heading: &str, entries: &[Entry], color: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<li><i class="{} fa-fw mr-2 text-{color}-500"></i>{}</li>"#,
                escape(&e.icon),
                escape(&e.text)
            )
        })
        .collect();
    format!(
        r#"<div><h4 class="font-semibold text-lg mb-2">{heading}</h4><ul class="space-y-2 list-none pl-0">{items}</ul></div>"#
    )
}

pub fn professor(professor: &Professor) -> String {
    let name = escape(&professor.name);
    let mut contact = String::new();
    if let Some(email) = present(professor.email.as_ref()) {
        let email = escape(email);
        let _ = write!(
            contact,
            r#"<p><i class="fas fa-envelope fa-fw mr-2"></i><a href="mailto:{email}" class="hover:text-blue-500">{email}</a></p>"#
        );
    }
    if let Some(office) = present(professor.office.as_ref()) {
        let _ = write!(
            contact,
            r#"<p><i class="fas fa-map-marker-alt fa-fw mr-2"></i>{}</p>"#,
            escape(office)
        );
    }
    if let Some(ext) = present(professor.ext.as_ref()) {
        let _ = write!(
            contact,
            r#"<p><i class="fas fa-phone fa-fw mr-2"></i>分機: {}</p>"#,
            escape(ext)
        );
    }
    if !contact.is_empty() {
        contact = format!(r#"<div class="mt-6 flex flex-wrap gap-x-6 gap-y-2">{contact}</div>"#);
    }
    let lists = entries("主要職務", &professor.titles, "blue")
        + &entries("榮譽獎項", &professor.honors, "yellow");
    let lists = if lists.is_empty() {
        lists
    } else {
        format!(r#"<div class="mt-4 grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-4">{lists}</div>"#)
    };
    format!(
        r#"<h2 class="text-3xl font-bold text-center mb-8">指導教授</h2>
<div class="bg-white dark:bg-slate-800 rounded-2xl shadow-lg p-8 max-w-4xl mx-auto flex flex-col md:flex-row items-center gap-8">
<div class="flex-shrink-0 w-36 h-36 md:w-48 md:h-48 rounded-full border-4 border-blue-200 dark:border-blue-700 overflow-hidden"><img src="{image}" alt="{name}" class="w-full h-full object-cover {position}"></div>
<div class="text-left w-full">
<h3 class="text-3xl font-bold text-blue-600 dark:text-blue-400">{name}</h3>
{lists}{contact}
</div>
</div>"#,
        image = escape(&professor.image),
        position = position_class(professor.img_position.as_ref()),
    )
}

fn member_card(member: &TeamMember) -> String {
    let mut contact = String::new();
    if let Some(email) = present(member.email.as_ref()) {
        let email = escape(email);
        let _ = write!(
            contact,
            r#"<div class="flex items-start"><i class="fas fa-envelope fa-fw mr-2"></i><a href="mailto:{email}" class="text-blue-500 break-all">{email}</a></div>"#
        );
    }
    if let Some(office) = present(member.office.as_ref()) {
        let _ = write!(
            contact,
            r#"<div class="flex items-center"><i class="fas fa-map-marker-alt fa-fw mr-2"></i> {}</div>"#,
            escape(office)
        );
    }
    if let Some(ext) = present(member.ext.as_ref()) {
        let _ = write!(
            contact,
            r#"<div class="flex items-center"><i class="fas fa-phone fa-fw mr-2"></i> 分機: {}</div>"#,
            escape(ext)
        );
    }
    let contact = if contact.is_empty() {
        contact
    } else {
        format!(r#"<div class="mt-auto pt-4 border-t space-y-2 text-sm text-left">{contact}</div>"#)
    };
    format!(
        r#"<div class="team-member-card text-center bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md flex flex-col h-full"><div class="w-32 h-32 rounded-full mx-auto mb-4 shadow-md overflow-hidden"><img src="{}" alt="{name}" class="w-full h-full object-cover {}"></div><div class="flex-grow mb-4"><h4 class="text-xl font-semibold">{name}</h4></div>{contact}</div>"#,
        escape(&member.image),
        position_class(member.img_position.as_ref()),
        name = escape(&member.name),
    )
}

/// Cards for one role, or `None` when the role has nobody and its
/// section must be hidden.
pub fn members(members: &[TeamMember]) -> Option<String> {
    (!members.is_empty()).then(|| members.iter().map(member_card).collect())
}

fn alumnus_card(alumnus: &Alumnus) -> String {
    let mut career = String::new();
    if let Some(company) = present(alumnus.company.as_ref()) {
        let _ = write!(
            career,
            r#"<p class="font-semibold text-blue-600 dark:text-blue-400">{}</p>"#,
            escape(company)
        );
    }
    if let Some(title) = present(alumnus.title.as_ref()) {
        let _ = write!(
            career,
            r#"<p class="text-slate-600 dark:text-slate-300">{}</p>"#,
            escape(title)
        );
    }
    let career = if career.is_empty() {
        career
    } else {
        format!(r#"<div class="mt-auto pt-4 border-t">{career}</div>"#)
    };
    format!(
        r#"<div class="team-member-card text-center bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md flex flex-col h-full"><div class="w-32 h-32 rounded-full mx-auto mb-4 shadow-md overflow-hidden"><img src="{}" alt="{name}" class="w-full h-full object-cover {}" onerror="this.src='{PLACEHOLDER_IMAGE}';"></div><div class="flex-grow"><h4 class="text-xl font-semibold">{name}</h4></div>{career}</div>"#,
        escape(present(alumnus.image.as_ref()).unwrap_or(PLACEHOLDER_IMAGE)),
        position_class(alumnus.img_position.as_ref()),
        name = escape(&alumnus.name),
    )
}

fn heading(group: AlumniGroup) -> String {
    match group {
        AlumniGroup::Year(year) => format!("{year}級 畢業系友"),
        AlumniGroup::Doctoral => String::from("博士班 畢業系友"),
        AlumniGroup::Master => String::from("碩士班 畢業系友"),
        AlumniGroup::All => String::from("畢業系友"),
    }
}

/// One section per non-empty group, or `None` when there are no alumni
/// at all and the whole alumni area must be hidden.
pub fn alumni(alumni: &Alumni) -> Option<String> {
    let groups = alumni.groups();
    if groups.is_empty() {
        return None;
    }
    Some(
        groups
            .into_iter()
            .map(|(group, members)| {
                format!(
                    r#"<section><h2 class="text-2xl font-bold border-l-4 border-teal-500 pl-4 mb-6">{}</h2><div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">{}</div></section>"#,
                    heading(group),
                    members.iter().map(alumnus_card).collect::<String>()
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn member(name: &str) -> TeamMember {
        TeamMember {
            name: name.to_owned(),
            image: format!("{name}.png"),
            img_position: None,
            email: None,
            office: None,
            ext: None,
        }
    }

    fn alumnus(name: &str) -> Alumnus {
        Alumnus {
            name: name.to_owned(),
            image: Some(format!("{name}.png")),
            img_position: None,
            company: None,
            title: None,
        }
    }

    #[test]
    fn test_optional_fields_omitted() {
        let html = members(&[member("Ann")]).unwrap();
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("分機"));
        assert!(!html.contains("fa-map-marker-alt"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("border-t"));
    }

    #[test]
    fn test_optional_fields_rendered() {
        let mut m = member("Ann");
        m.email = Some(String::from("ann@lab.org"));
        m.ext = Some(String::from("  "));
        m.img_position = Some(String::from("top"));
        let html = members(&[m]).unwrap();
        assert!(html.contains(r#"href="mailto:ann@lab.org""#));
        assert!(!html.contains("分機"));
        assert!(html.contains("object-position-top"));
    }

    #[test]
    fn test_empty_role_is_hidden() {
        assert_eq!(members(&[]), None);
    }

    #[test]
    fn test_alumni_by_year() {
        let mut years = BTreeMap::new();
        years.insert(2022, vec![alumnus("A"), alumnus("B")]);
        years.insert(2019, vec![]);
        years.insert(2020, vec![alumnus("C")]);
        let html = alumni(&Alumni::ByYear(years)).unwrap();
        assert!(!html.contains("2019級"));
        let recent = html.find("2022級 畢業系友").unwrap();
        let older = html.find("2020級 畢業系友").unwrap();
        assert!(recent < older);
        assert_eq!(html.matches("team-member-card").count(), 3);
    }

    #[test]
    fn test_alumni_only_2022() {
        let mut years = BTreeMap::new();
        years.insert(2022, vec![alumnus("A"), alumnus("B")]);
        years.insert(2019, vec![]);
        let html = alumni(&Alumni::ByYear(years)).unwrap();
        assert_eq!(html.matches("<section>").count(), 1);
        assert!(html.contains("2022級"));
    }

    #[test]
    fn test_alumni_empty() {
        assert_eq!(alumni(&Alumni::Flat(vec![])), None);
        assert_eq!(
            alumni(&Alumni::ByDegree {
                phd: vec![],
                master: vec![]
            }),
            None
        );
    }

    #[test]
    fn test_alumni_by_degree() {
        let html = alumni(&Alumni::ByDegree {
            phd: vec![alumnus("D")],
            master: vec![alumnus("M")],
        })
        .unwrap();
        assert!(html.find("博士班").unwrap() < html.find("碩士班").unwrap());
    }

    fn bare_professor() -> Professor {
        Professor {
            name: String::from("Prof"),
            image: String::from("p.png"),
            img_position: None,
            titles: Vec::new(),
            honors: Vec::new(),
            email: None,
            office: None,
            ext: None,
        }
    }

    #[test]
    fn test_professor_without_details_has_no_empty_shells() {
        let html = professor(&bare_professor());
        assert!(!html.contains("gap-y-2"));
        assert!(!html.contains("<ul"));
        assert!(!html.contains("md:grid-cols-2"));
        assert!(!html.contains("主要職務"));
        assert!(!html.contains("榮譽獎項"));
    }

    #[test]
    fn test_professor_details() {
        let mut prof = bare_professor();
        prof.titles = vec![Entry {
            icon: String::from("fas fa-star"),
            text: String::from("Chair"),
        }];
        prof.ext = Some(String::from("1234"));
        let html = professor(&prof);
        assert!(html.contains("主要職務"));
        assert!(!html.contains("榮譽獎項"));
        assert!(html.contains("分機: 1234"));
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn test_alumnus_placeholder_image() {
        let mut a = alumnus("A");
        a.image = None;
        a.company = Some(String::from("X"));
        let html = alumni(&Alumni::Flat(vec![a, alumnus("B")])).unwrap();
        assert!(html.contains(&format!(r#"<img src="{PLACEHOLDER_IMAGE}""#)));
        assert!(html.contains(r#"<img src="B.png""#));
    }

    #[test]
    fn test_escaping() {
        let html = members(&[member("<b>")]).unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
