//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::rule;
//!
//! // Check: keeps (or reshapes) the input when the condition holds
//! rule! {
//!     pub NotEmpty for str => String;
//!     check(input) { !input.is_empty() }
//!     output(input) { input.to_owned() }
//!     message { "Empty string" }
//!     fn not_empty();
//! }
//!
//! // Conversion: the body produces the outcome itself
//! rule! {
//!     pub ParseInt for str => i64;
//!     convert(input) { input.parse::<i64>().map_err(|_| "Not a number").into() }
//!     fn parse_int();
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit check** (zero-sized):
/// ```rust,ignore
/// rule! {
///     pub InitialCap for str => String;
///     check(input) { input.starts_with(char::is_uppercase) }
///     output(input) { input.to_owned() }
///     message { "No initial cap" }
///     fn initial_cap();
/// }
/// ```
///
/// **Unit conversion** (the body returns an `Outcome`):
/// ```rust,ignore
/// rule! {
///     pub Capitalize for str => String;
///     convert(input) { Outcome::success(capitalize_first(input)) }
///     fn capitalize();
/// }
/// ```
///
/// **Struct with fields + conversion + custom constructor**:
/// ```rust,ignore
/// rule! {
///     pub Lookup { key: Cow<'static, str> } for FormData => String;
///     convert(self, input) { input.get(self.key.as_ref()).cloned().into() }
///     new(key: impl Into<Cow<'static, str>>) { Self { key: key.into() } }
///     fn lookup(key: impl Into<Cow<'static, str>>);
/// }
/// ```
///
/// **Generic check**:
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min<T: PartialOrd + Clone> { bound: T } for T => T;
///     check(self, input) { *input >= self.bound }
///     output(self, input) { input.clone() }
///     message { "Too small" }
///     fn min(bound: T);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit check + factory fn ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $output:ty;
        check($inp:ident) $check:block
        output($oinp:ident) $out:block
        message $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;
            type Output = $output;

            #[allow(unused_variables)]
            fn apply(&self, $inp: &Self::Input) -> $crate::foundation::Outcome<Self::Output> {
                if $check {
                    let $oinp = $inp;
                    $crate::foundation::Outcome::Success($out)
                } else {
                    $crate::foundation::Outcome::failure($msg)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2: Unit conversion + factory fn ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $output:ty;
        convert($inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;
            type Output = $output;

            fn apply(&self, $inp: &Self::Input) -> $crate::foundation::Outcome<Self::Output> {
                $body
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 3: Struct with fields + conversion + custom new + factory ─
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty => $output:ty;
        convert($self_:ident, $inp:ident) $body:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;
            type Output = $output;

            fn apply(&$self_, $inp: &Self::Input) -> $crate::foundation::Outcome<Self::Output> {
                $body
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4: Generic struct + check + auto new + factory fn ─────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$param:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty => $output:ty;
        check($self_:ident, $inp:ident) $check:block
        output($self2:ident, $oinp:ident) $out:block
        message $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$param> {
            $(pub $field: $fty,)+
        }

        impl<$param: $first_bound $(+ $rest_bound)*> $name<$param> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$param: $first_bound $(+ $rest_bound)*> $crate::foundation::Rule for $name<$param> {
            type Input = $input;
            type Output = $output;

            #[allow(unused_variables)]
            fn apply(&$self_, $inp: &Self::Input) -> $crate::foundation::Outcome<Self::Output> {
                if $check {
                    let $oinp = $inp;
                    $crate::foundation::Outcome::Success($out)
                } else {
                    $crate::foundation::Outcome::failure($msg)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$param: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$param> {
            $name::new($($farg),*)
        }
    };
}
