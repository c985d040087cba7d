//! Command-line arguments

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::guard::Route;

pub const USAGE: &str = "\
Usage: library-admin <command>

Commands:
  login [LOGIN] [PASSWORD]                   Sign in (defaults: admin / admin123)
  logout                                     Forget the stored session
  dashboard                                  Show who is logged in
  members                                    List members
  members add NOM PRENOM EMAIL [DATE]        Register a member
  books                                      List categories, authors and books
  books add-category NOM CHAMP               Create a category
  books add-author NOM PRENOM                Create an author
  books add TITRE ISBN QTY [CAT_ID] [AUT_ID] Create a book
  loans                                      List loans
  loans borrow BOOK_ID MEMBER_ID [DATE]      Lend a book (date defaults to today)
  loans return LOAN_ID [DATE]                Record a return (date defaults to today)
  health                                     Check that the API is up
  help                                       Show this message

Dates use the YYYY-MM-DD format.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Health,
    Login {
        login: Option<String>,
        password: Option<String>,
    },
    Logout,
    Show(Route),
    AddMember {
        nom: String,
        prenom: String,
        email: String,
        date_adhesion: Option<NaiveDate>,
    },
    AddCategory {
        nom: String,
        champ: String,
    },
    AddAuthor {
        nom: String,
        prenom: String,
    },
    AddBook {
        titre: String,
        isbn: String,
        quantite: i64,
        category: Option<i64>,
        author: Option<i64>,
    },
    Borrow {
        book: i64,
        member: i64,
        date: Option<NaiveDate>,
    },
    Return {
        loan: i64,
        date: Option<NaiveDate>,
    },
}

impl Command {
    /// Parse arguments, program name excluded
    pub fn parse<S: AsRef<str>>(args: &[S]) -> AppResult<Command> {
        let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();
        let command = match args.as_slice() {
            [] | ["help"] | ["--help"] | ["-h"] => Command::Help,
            ["health"] => Command::Health,
            ["login", rest @ ..] if rest.len() <= 2 => Command::Login {
                login: rest.first().map(|s| s.to_string()),
                password: rest.get(1).map(|s| s.to_string()),
            },
            ["logout"] => Command::Logout,
            ["dashboard"] => Command::Show(Route::Dashboard),
            ["members"] => Command::Show(Route::Members),
            ["books"] => Command::Show(Route::Books),
            ["loans"] => Command::Show(Route::Loans),
            [path] if path.starts_with('/') => Command::Show(Route::from_path(path)),
            ["members", "add", nom, prenom, email, rest @ ..] if rest.len() <= 1 => {
                Command::AddMember {
                    nom: nom.to_string(),
                    prenom: prenom.to_string(),
                    email: email.to_string(),
                    date_adhesion: optional(rest.first(), parse_date)?,
                }
            }
            ["books", "add-category", nom, champ] => Command::AddCategory {
                nom: nom.to_string(),
                champ: champ.to_string(),
            },
            ["books", "add-author", nom, prenom] => Command::AddAuthor {
                nom: nom.to_string(),
                prenom: prenom.to_string(),
            },
            ["books", "add", titre, isbn, quantite, rest @ ..] if rest.len() <= 2 => {
                Command::AddBook {
                    titre: titre.to_string(),
                    isbn: isbn.to_string(),
                    quantite: parse_number("QTY", quantite)?,
                    category: optional(rest.first(), |s| parse_number("CAT_ID", s))?,
                    author: optional(rest.get(1), |s| parse_number("AUT_ID", s))?,
                }
            }
            ["loans", "borrow", book, member, rest @ ..] if rest.len() <= 1 => Command::Borrow {
                book: parse_number("BOOK_ID", book)?,
                member: parse_number("MEMBER_ID", member)?,
                date: optional(rest.first(), parse_date)?,
            },
            ["loans", "return", loan, rest @ ..] if rest.len() <= 1 => Command::Return {
                loan: parse_number("LOAN_ID", loan)?,
                date: optional(rest.first(), parse_date)?,
            },
            _ => {
                return Err(AppError::Usage(format!(
                    "Unknown command: {}\n\n{}",
                    args.join(" "),
                    USAGE
                )))
            }
        };
        Ok(command)
    }

    /// Screen the command acts on. `None` for commands that need no view.
    pub fn route(&self) -> Option<Route> {
        match self {
            Command::Help | Command::Health => None,
            Command::Login { .. } | Command::Logout => Some(Route::Login),
            Command::Show(route) => Some(*route),
            Command::AddMember { .. } => Some(Route::Members),
            Command::AddCategory { .. } | Command::AddAuthor { .. } | Command::AddBook { .. } => {
                Some(Route::Books)
            }
            Command::Borrow { .. } | Command::Return { .. } => Some(Route::Loans),
        }
    }
}

fn optional<T>(
    value: Option<&&str>,
    parse: impl Fn(&str) -> AppResult<T>,
) -> AppResult<Option<T>> {
    value.map(|s| parse(*s)).transpose()
}

fn parse_number(name: &str, value: &str) -> AppResult<i64> {
    value
        .parse()
        .map_err(|_| AppError::Usage(format!("{} must be a whole number, got '{}'", name, value)))
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Usage(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}
