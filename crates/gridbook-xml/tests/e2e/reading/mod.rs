mod excel_export;
