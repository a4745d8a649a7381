use crate::{PhoneNumberUtil, metadata::test_metadata::test_metadata};


static ONCE: std::sync::Once = std::sync::Once::new();

fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberUtil::new_for_metadata(test_metadata())
}
