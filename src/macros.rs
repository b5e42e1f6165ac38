/// Declares the app-wide signal registry.
///
/// `app_signals! { name: Type = initial, ... }` expands to a `Globals` struct,
/// a lazily initialised static holding it, and one `pub fn name()` accessor
/// per signal.
#[macro_export]
macro_rules! app_signals {
    ( $( $(#[$meta:meta])* $name:ident : $ty:ty = $init:expr ),+ $(,)? ) => {
        pub struct Globals {
            $( pub $name: ::leptos::RwSignal<$ty>, )+
        }

        static GLOBALS: ::once_cell::sync::OnceCell<Globals> = ::once_cell::sync::OnceCell::new();

        pub fn globals() -> &'static Globals {
            GLOBALS.get_or_init(|| Globals {
                $( $name: ::leptos::create_rw_signal($init), )+
            })
        }

        $(
            $(#[$meta])*
            pub fn $name() -> ::leptos::RwSignal<$ty> {
                globals().$name
            }
        )+
    };
}
