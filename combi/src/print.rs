use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::problems::{Problem, Solution};

/// One row per solution part. The first row of each problem carries its id and a separator.
pub fn tabulate_solutions(worked: &[(&Problem, Solution)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(30)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Problem".into(), "Part".into(), "Answer".into()],
        ));

    for (problem, solution) in worked {
        for (index, part) in solution.parts.iter().enumerate() {
            let (id, styles) = if index == 0 {
                (
                    format!("{}", problem.id),
                    Styles::default().with(Separator(true)),
                )
            } else {
                (String::new(), Styles::default())
            };
            table.push_row(Row::new(
                styles,
                vec![id.into(), part.label.into(), format!("{}", part.value).into()],
            ));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use crate::problems::{find, problems};

    use super::*;

    #[test]
    fn renders_every_part() {
        let worked = [2, 13]
            .into_iter()
            .map(|id| {
                let problem = find(id).unwrap();
                (problem, problem.solve().unwrap())
            })
            .collect::<Vec<_>>();
        let rendered = Console::default().render(&tabulate_solutions(&worked)).to_string();
        assert!(rendered.contains("Answer"), "{rendered}");
        assert!(rendered.contains("a) different prizes"), "{rendered}");
        assert!(rendered.contains("7980"), "{rendered}");
        assert!(rendered.contains("1330"), "{rendered}");
        assert!(rendered.contains("13"), "{rendered}");
    }

    #[test]
    fn renders_whole_catalogue() {
        let worked = problems()
            .iter()
            .map(|problem| (problem, problem.solve().unwrap()))
            .collect::<Vec<_>>();
        let rendered = Console::default().render(&tabulate_solutions(&worked)).to_string();
        assert!(rendered.contains("271889832302902251378777003692626953125"), "{rendered}");
    }
}
