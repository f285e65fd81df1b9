use salary_analyzer::LanguageStatistics;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];
const MISSING: &str = "-";

fn row(statistics: &LanguageStatistics) -> [String; 4] {
    [
        statistics.language.clone(),
        statistics.vacancies_found.to_string(),
        statistics.vacancies_processed.to_string(),
        statistics
            .average_salary
            .map_or_else(|| MISSING.to_owned(), |salary| salary.to_string()),
    ]
}

fn separator(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    line
}

/// Render an ascii table with the title embedded in its top border.
/// The title is left out when it does not fit into the border.
pub fn render_table(title: &str, statistics: &[LanguageStatistics]) -> String {
    let header = HEADER.map(String::from);
    let rows = statistics.iter().map(row).collect::<Vec<_>>();

    let mut widths = [0usize; 4];
    for cells in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = separator(&widths);
    let title_len = title.chars().count();
    let top = if title_len + 2 <= border.chars().count() {
        let rest = border.chars().skip(title_len + 1).collect::<String>();
        format!("+{}{}", title, rest)
    } else {
        border.clone()
    };

    let mut lines = vec![top, format_row(&header, &widths), border.clone()];
    lines.extend(rows.iter().map(|cells| format_row(cells, &widths)));
    lines.push(border);
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    fn stats(language: &str, found: usize, processed: usize, average: Option<u64>) -> LanguageStatistics {
        LanguageStatistics {
            language: language.to_owned(),
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn test_render_table() {
        let table = render_table("HeadHunter Moscow", &[stats("Python", 2, 1, Some(60000))]);
        let lines = table.lines().collect::<Vec<_>>();
        let border = format!(
            "+{}+{}+{}+{}+",
            "-".repeat(23),
            "-".repeat(18),
            "-".repeat(21),
            "-".repeat(18)
        );

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            format!("+HeadHunter Moscow{}+{}+{}+{}+", "-".repeat(6), "-".repeat(18), "-".repeat(21), "-".repeat(18))
        );
        assert_eq!(
            lines[1],
            "| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |"
        );
        assert_eq!(lines[2], border);
        assert_eq!(
            lines[3],
            format!(
                "| Python{} | 2{} | 1{} | 60000{} |",
                " ".repeat(15),
                " ".repeat(15),
                " ".repeat(18),
                " ".repeat(11)
            )
        );
        assert_eq!(lines[4], border);
    }

    #[test]
    fn test_rows_keep_given_order_and_mark_missing_average() {
        let table = render_table(
            "SuperJob Moscow",
            &[stats("Scala", 0, 0, None), stats("Go", 12, 7, Some(180000))],
        );
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines[3].starts_with("| Scala "));
        assert!(lines[3].contains(" | -"));
        assert!(lines[4].starts_with("| Go "));
        assert!(lines[4].contains("180000"));
    }

    #[test]
    fn test_lines_have_equal_width() {
        let table = render_table(
            "SuperJob Moscow",
            &[stats("Objective-C", 1, 1, Some(1)), stats("C", 300, 250, Some(215000))],
        );
        let widths = table
            .lines()
            .map(|line| line.chars().count())
            .collect::<Vec<_>>();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_long_title_is_dropped() {
        let title = "x".repeat(200);
        let table = render_table(&title, &[]);
        assert!(!table.contains(&title));
        assert!(table.lines().next().map_or(false, |top| top.starts_with("+---")));
    }
}
