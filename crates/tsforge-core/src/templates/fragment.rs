//! Named template fragments

/// A subtree of the template root copied verbatim into a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    TypeScript,
    Eslint,
    Nodemon,
    Husky,
    CommitLint,
    EditorConfig,
    Git,
}

impl Fragment {
    pub const ALL: [Fragment; 7] = [
        Fragment::TypeScript,
        Fragment::Eslint,
        Fragment::Nodemon,
        Fragment::Husky,
        Fragment::CommitLint,
        Fragment::EditorConfig,
        Fragment::Git,
    ];

    /// Directory name under the template root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Fragment::TypeScript => "typescript",
            Fragment::Eslint => "eslint",
            Fragment::Nodemon => "nodemon",
            Fragment::Husky => "husky",
            Fragment::CommitLint => "commitlint",
            Fragment::EditorConfig => "editorconfig",
            Fragment::Git => "git",
        }
    }
}
