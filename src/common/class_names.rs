/// A piece of a `class` attribute, consumed by [`clsx!`](crate::clsx).
pub trait ClassFragment {
    fn append_to(&self, classes: &mut String);
}

fn push_class(classes: &mut String, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    if !classes.is_empty() {
        classes.push(' ');
    }
    classes.push_str(fragment);
}

impl ClassFragment for &str {
    fn append_to(&self, classes: &mut String) {
        push_class(classes, self);
    }
}

impl ClassFragment for String {
    fn append_to(&self, classes: &mut String) {
        push_class(classes, self);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(&self, classes: &mut String) {
        if let Some(fragment) = self {
            fragment.append_to(classes);
        }
    }
}

impl<T: ClassFragment> ClassFragment for (T, bool) {
    fn append_to(&self, classes: &mut String) {
        if self.1 {
            self.0.append_to(classes);
        }
    }
}
