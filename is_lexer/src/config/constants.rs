pub mod compile_time {
    pub mod lexical {
        /// Character the scanner sees one position past the end of input.
        /// Closes any open token through the ordinary closing rule.
        pub const END_OF_INPUT: char = '\n';

        /// Lookahead reported past the end of input; neither a digit nor a sign
        pub const LOOKAHEAD_SENTINEL: char = '\t';

        /// Quote characters subtracted from a closed string's column
        pub const CLOSED_STRING_QUOTES: usize = 2;

        /// Quote characters subtracted from a force-closed string's column
        pub const UNTERMINATED_STRING_QUOTES: usize = 1;

        /// Longest text echoed back in a lexical error message
        pub const MAX_ERROR_EXCERPT_LENGTH: usize = 32;
    }

    pub mod logging {
        /// Events retained by the in-memory logger before the oldest are dropped
        /// RESOURCE: Bounds memory use of long-lived test and tooling sessions
        pub const MEMORY_LOGGER_CAPACITY: usize = 10_000;

        /// Maximum message length before truncation in console output
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
