use std::process;

fn main() {
    seqrev::init_logging();

    match seqrev::reversed_last_name() {
        Some(name) => println!("{}", name),
        None => {
            #[cfg(feature = "use_logging")]
            log::error!("reversed sample produced no records");
            process::exit(1);
        }
    }
}
