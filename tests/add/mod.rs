mod adding_ignored_files_is_skipped;
mod adding_a_non_existent_file_is_reported;
